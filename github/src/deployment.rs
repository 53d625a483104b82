use super::{DateTime, SimpleUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

/// GitHub API docs: https://docs.github.com/en/rest/deployments/deployments
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    pub url: String,
    pub id: u64,
    pub node_id: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    pub payload: Value,
    pub original_environment: Option<String>,
    pub environment: String,
    pub description: Option<String>,
    pub creator: Option<SimpleUser>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub statuses_url: String,
    pub repository_url: String,
    pub transient_environment: bool,
    pub production_environment: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub url: String,
    pub id: u64,
    pub node_id: String,
    pub state: DeploymentState,
    pub creator: Option<SimpleUser>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub target_url: Option<String>,
    pub log_url: Option<String>,
    pub environment_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deployment_url: String,
    pub repository_url: String,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentState {
    Error,
    Failure,
    Inactive,
    InProgress,
    Queued,
    Pending,
    Success,
}

impl DeploymentState {
    /// Whether no further status is expected for the deployment
    pub fn is_final(self) -> bool {
        matches!(
            self,
            DeploymentState::Error
                | DeploymentState::Failure
                | DeploymentState::Inactive
                | DeploymentState::Success
        )
    }
}

/// A GitHub Marketplace purchase of a listing's plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePurchase {
    pub account: MarketplaceAccount,
    pub billing_cycle: MarketplaceBillingCycle,
    pub unit_count: u64,
    pub on_free_trial: bool,
    pub free_trial_ends_on: Option<DateTime>,
    pub next_billing_date: Option<DateTime>,
    pub plan: MarketplacePlan,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    pub id: u64,
    pub node_id: Option<String>,
    pub login: String,
    pub organization_billing_email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePlan {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub monthly_price_in_cents: u64,
    pub yearly_price_in_cents: u64,
    pub price_model: MarketplacePriceModel,
    pub has_free_trial: bool,
    pub unit_name: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MarketplaceBillingCycle {
    Monthly,
    Yearly,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketplacePriceModel {
    Free,
    FlatRate,
    PerUnit,
}

#[cfg(test)]
mod test {
    use super::{DeploymentState, MarketplaceBillingCycle, MarketplacePriceModel, MarketplacePurchase};
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn price_model_spellings() {
        assert_eq!(
            MarketplacePriceModel::VARIANTS,
            &["FREE", "FLAT_RATE", "PER_UNIT"]
        );
        assert_eq!(
            MarketplacePriceModel::from_str("FLAT_RATE").unwrap(),
            MarketplacePriceModel::FlatRate
        );
        assert!(MarketplacePriceModel::from_str("flat_rate").is_err());
    }

    #[test]
    fn deployment_state() {
        assert_eq!(
            DeploymentState::from_str("in_progress").unwrap(),
            DeploymentState::InProgress
        );
        assert!(!DeploymentState::Queued.is_final());
        assert!(DeploymentState::Success.is_final());
    }

    #[test]
    fn purchase() {
        const JSON: &str = r#"
            {
                "account": {
                    "type": "Organization",
                    "id": 18404719,
                    "node_id": "MDEyOk9yZ2FuaXphdGlvbjE4NDA0NzE5",
                    "login": "username",
                    "organization_billing_email": "username@email.com"
                },
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
                    "price_model": "FLAT_RATE",
                    "has_free_trial": true,
                    "unit_name": null,
                    "bullets": ["Is Basic", "Because Basic "]
                }
            }
        "#;

        let purchase: MarketplacePurchase = serde_json::from_str(JSON).unwrap();
        assert_eq!(purchase.billing_cycle, MarketplaceBillingCycle::Monthly);
        assert_eq!(purchase.plan.price_model, MarketplacePriceModel::FlatRate);
        assert_eq!(purchase.account.login, "username");
    }
}
