use crate::{
    Change, DateTime, MarketplacePurchase, Organization, Project, ProjectCard, ProjectColumn,
    RepoEventInfo, Repository, SimpleUser,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

/// Project payloads are delivered for organization projects as well, which have no repository
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvent {
    pub action: ProjectAction,
    pub project: Project,
    pub changes: Option<ProjectChanges>,
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub installation: Option<Value>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectAction {
    Created,
    Edited,
    Closed,
    Reopened,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectChanges {
    pub name: Option<Change>,
    pub body: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectCardEvent {
    pub action: ProjectCardAction,
    pub changes: Option<ProjectCardChanges>,
    pub after_id: Option<u64>,
    pub project_card: ProjectCard,
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub installation: Option<Value>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectCardAction {
    Created,
    Edited,
    Moved,
    Converted,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectCardChanges {
    pub note: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectColumnEvent {
    pub action: ProjectColumnAction,
    pub changes: Option<ProjectColumnChanges>,
    pub after_id: Option<u64>,
    pub project_column: ProjectColumn,
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub installation: Option<Value>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectColumnAction {
    Created,
    Edited,
    Moved,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectColumnChanges {
    pub name: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePurchaseEvent {
    pub action: MarketplacePurchaseAction,
    pub effective_date: DateTime,
    pub marketplace_purchase: MarketplacePurchase,
    pub previous_marketplace_purchase: Option<MarketplacePurchase>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MarketplacePurchaseAction {
    Purchased,
    PendingChange,
    PendingChangeCancelled,
    Changed,
    Cancelled,
}

/// The webhook itself was deleted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaEvent {
    pub action: MetaAction,
    pub hook_id: u64,
    pub hook: Value,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MetaAction {
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageEvent {
    pub action: PackageAction,
    pub package: Value,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PackageAction {
    Published,
    Updated,
}

/// Sent once when a webhook is created
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PingEvent {
    pub zen: String,
    pub hook_id: u64,
    pub hook: Value,
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub sender: Option<SimpleUser>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipEvent {
    pub action: SponsorshipAction,
    pub effective_date: Option<DateTime>,
    pub sponsorship: Value,
    pub changes: Option<SponsorshipChanges>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SponsorshipAction {
    Created,
    Cancelled,
    Edited,
    TierChanged,
    PendingCancellation,
    PendingTierChange,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipChanges {
    pub tier: Option<Value>,
    pub privacy_level: Option<Change>,
}

optional_repo_origin!(ProjectEvent, ProjectCardEvent, ProjectColumnEvent, PingEvent);
repo_origin!(MetaEvent, PackageEvent);
user_origin!(MarketplacePurchaseEvent, SponsorshipEvent);

#[cfg(test)]
mod test {
    use super::{MarketplacePurchaseAction, MarketplacePurchaseEvent, ProjectCardEvent};
    use crate::events::Origin;

    #[test]
    fn organization_project_card() {
        const JSON: &str = r#"
            {
                "action": "created",
                "project_card": {
                    "url": "https://api.github.com/projects/columns/cards/21567453",
                    "project_url": "https://api.github.com/projects/2640902",
                    "column_url": "https://api.github.com/projects/columns/5368157",
                    "column_id": 5368157,
                    "id": 21567453,
                    "node_id": "MDExOlByb2plY3RDYXJkMjE1Njc0NTM=",
                    "note": "Work that can be completed in one hour or less.",
                    "archived": false,
                    "creator": { "login": "Codertocat", "id": 21031067, "type": "User" },
                    "created_at": "2019-05-15T15:21:10Z",
                    "updated_at": "2019-05-15T15:21:10Z"
                },
                "organization": { "login": "Octocoders", "id": 38302899 },
                "sender": { "login": "Codertocat", "id": 21031067, "type": "User" }
            }
        "#;

        let event: ProjectCardEvent = serde_json::from_str(JSON).unwrap();
        assert_eq!(event.project_card.column_id, Some(5368157));
        assert!(event.repository().is_none());
        assert!(event.after_id.is_none());
    }

    #[test]
    fn marketplace_purchase_event() {
        const JSON: &str = r#"
            {
                "action": "purchased",
                "effective_date": "2017-10-25T00:00:00+00:00",
                "sender": { "login": "username", "id": 3877742, "type": "User" },
                "marketplace_purchase": {
                    "account": { "type": "Organization", "id": 18404719, "login": "username" },
                    "billing_cycle": "monthly",
                    "unit_count": 1,
                    "on_free_trial": false,
                    "free_trial_ends_on": null,
                    "next_billing_date": "2017-11-05T00:00:00+00:00",
                    "plan": {
                        "id": 435,
                        "name": "Basic Plan",
                        "description": "Basic Features",
                        "monthly_price_in_cents": 1000,
                        "yearly_price_in_cents": 10000,
                        "price_model": "PER_UNIT",
                        "has_free_trial": true,
                        "unit_name": "seat",
                        "bullets": []
                    }
                }
            }
        "#;

        let event: MarketplacePurchaseEvent = serde_json::from_str(JSON).unwrap();
        assert_eq!(event.action, MarketplacePurchaseAction::Purchased);
        assert_eq!(event.origin().map(|u| u.login.as_str()), Some("username"));
        assert_eq!(event.marketplace_purchase.plan.unit_name.as_deref(), Some("seat"));
    }
}
