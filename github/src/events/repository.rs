use crate::{
    BranchProtectionRule, Change, DateTime, DeployKey, Page, Release, RepoEventInfo, Repository,
    SecurityAdvisory, SimpleUser,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEvent {
    pub action: RepositoryAction,
    pub changes: Option<Value>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepositoryAction {
    Created,
    Deleted,
    Archived,
    Unarchived,
    Edited,
    Renamed,
    Transferred,
    Publicized,
    Privatized,
}

/// A custom event triggered through the repository dispatch endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDispatchEvent {
    pub action: String,
    pub branch: Option<String>,
    #[serde(default)]
    pub client_payload: Value,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryImportEvent {
    pub status: RepositoryImportAction,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepositoryImportAction {
    Success,
    Cancelled,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepositoryVulnerabilityAlertEvent {
    pub action: RepositoryVulnerabilityAlertAction,
    pub alert: Value,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepositoryVulnerabilityAlertAction {
    Create,
    Dismiss,
    Resolve,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecretScanningAlertEvent {
    pub action: SecretScanningAlertAction,
    pub alert: Value,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SecretScanningAlertAction {
    Created,
    Resolved,
    Reopened,
}

/// A global security advisory was published, updated or withdrawn
///
/// These payloads are not tied to a repository and carry no sender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityAdvisoryEvent {
    pub action: SecurityAdvisoryAction,
    pub security_advisory: SecurityAdvisory,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SecurityAdvisoryAction {
    Published,
    Updated,
    Performed,
    Withdrawn,
}

impl super::Origin for SecurityAdvisoryEvent {
    type Origin = SecurityAdvisory;

    fn origin(&self) -> Option<&Self::Origin> {
        Some(&self.security_advisory)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarEvent {
    pub action: StarAction,
    pub starred_at: Option<DateTime>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StarAction {
    Created,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchEvent {
    pub action: WatchAction,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WatchAction {
    Started,
}

/// A private repository was made public
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicEvent {
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForkEvent {
    pub forkee: Repository,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: RefType,
    pub master_branch: String,
    pub description: Option<String>,
    pub pusher_type: String,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: RefType,
    pub pusher_type: String,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefType {
    Branch,
    Tag,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeployKeyEvent {
    pub action: DeployKeyAction,
    pub key: DeployKey,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeployKeyAction {
    Created,
    Deleted,
}

/// A collaborator was added to, removed from or edited on a repository
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberEvent {
    pub action: MemberAction,
    pub member: SimpleUser,
    pub changes: Option<MemberChanges>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MemberAction {
    Added,
    Removed,
    Edited,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberChanges {
    pub old_permission: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchProtectionRuleEvent {
    pub action: BranchProtectionRuleAction,
    pub rule: BranchProtectionRule,
    pub changes: Option<Value>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BranchProtectionRuleAction {
    Created,
    Edited,
    Deleted,
}

/// Wiki pages were created or updated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GollumEvent {
    pub pages: Vec<Page>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleaseEvent {
    pub action: ReleaseAction,
    pub release: Release,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseAction {
    Published,
    Unpublished,
    Created,
    Edited,
    Deleted,
    #[serde(rename = "prereleased")]
    #[strum(serialize = "prereleased")]
    PreReleased,
    Released,
}

repo_origin!(
    RepositoryEvent,
    RepositoryDispatchEvent,
    RepositoryImportEvent,
    RepositoryVulnerabilityAlertEvent,
    SecretScanningAlertEvent,
    StarEvent,
    WatchEvent,
    PublicEvent,
    ForkEvent,
    CreateEvent,
    DeleteEvent,
    DeployKeyEvent,
    MemberEvent,
    BranchProtectionRuleEvent,
    GollumEvent,
    ReleaseEvent,
);

#[cfg(test)]
mod test {
    use super::{CreateEvent, RefType, ReleaseAction};
    use crate::events::{Event, EventTypes};
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn release_action_spellings() {
        assert_eq!(
            ReleaseAction::VARIANTS,
            &[
                "published",
                "unpublished",
                "created",
                "edited",
                "deleted",
                "prereleased",
                "released"
            ]
        );
        assert_eq!(
            ReleaseAction::from_str("prereleased").unwrap(),
            ReleaseAction::PreReleased
        );
        assert_eq!(
            serde_json::from_str::<ReleaseAction>(r#""prereleased""#).unwrap(),
            ReleaseAction::PreReleased
        );
        assert!(ReleaseAction::from_str("pre_released").is_err());
    }

    #[test]
    fn create_tag() {
        const JSON: &str = r#"
            {
                "ref": "simple-tag",
                "ref_type": "tag",
                "master_branch": "master",
                "description": null,
                "pusher_type": "user",
                "repository": {
                    "id": 186853002,
                    "name": "Hello-World",
                    "full_name": "Codertocat/Hello-World",
                    "owner": { "login": "Codertocat", "id": 21031067, "type": "User" },
                    "created_at": "2019-05-15T15:19:25Z"
                },
                "sender": { "login": "Codertocat", "id": 21031067, "type": "User" }
            }
        "#;

        let create: CreateEvent = serde_json::from_str(JSON).unwrap();
        assert_eq!(create.ref_type, RefType::Tag);
        assert_eq!(create.git_ref, "simple-tag");

        match Event::from_json(EventTypes::Create, JSON.as_bytes()).unwrap() {
            Event::Create(event) => assert_eq!(event, create),
            other => panic!("decoded as {:?}", other.event_type()),
        }
    }
}
