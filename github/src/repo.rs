use super::{DateTime, SimpleUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub owner: SimpleUser,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    pub forks_url: String,
    pub keys_url: String,
    pub collaborators_url: String,
    pub teams_url: String,
    pub hooks_url: String,
    pub issue_events_url: String,
    pub events_url: String,
    pub assignees_url: String,
    pub branches_url: String,
    pub tags_url: String,
    pub blobs_url: String,
    pub git_tags_url: String,
    pub git_refs_url: String,
    pub trees_url: String,
    pub statuses_url: String,
    pub languages_url: String,
    pub stargazers_url: String,
    pub contributors_url: String,
    pub subscribers_url: String,
    pub subscription_url: String,
    pub commits_url: String,
    pub git_commits_url: String,
    pub comments_url: String,
    pub issue_comment_url: String,
    pub contents_url: String,
    pub compare_url: String,
    pub merges_url: String,
    pub archive_url: String,
    pub downloads_url: String,
    pub issues_url: String,
    pub pulls_url: String,
    pub milestones_url: String,
    pub notifications_url: String,
    pub labels_url: String,
    pub releases_url: String,
    pub deployments_url: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub pushed_at: Option<DateTime>,
    pub git_url: String,
    pub ssh_url: String,
    pub clone_url: String,
    pub svn_url: String,
    pub homepage: Option<String>,
    pub size: u64,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub language: Option<String>,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_downloads: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub forks_count: u64,
    pub mirror_url: Option<String>,
    pub archived: bool,
    pub disabled: bool,
    pub open_issues_count: u64,
    pub license: Option<SimpleLicense>,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub default_branch: String,
    pub topics: Vec<String>,
    pub network_count: u64,
    pub subscribers_count: u64,
}

impl Repository {
    /// The repository owner's login, as used in API paths
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleLicense {
    pub key: String,
    pub name: String,
    pub url: Option<String>,
    pub spdx_id: Option<String>,
    pub node_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployKey {
    pub id: u64,
    pub key: String,
    pub url: String,
    pub title: String,
    pub verified: bool,
    pub created_at: DateTime,
    pub read_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeScanningAlertState {
    Open,
    Closed,
    Dismissed,
    Fixed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeScanningAlert {
    pub number: u64,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub url: String,
    pub html_url: String,
    pub instances_url: Option<String>,
    pub state: CodeScanningAlertState,
    pub fixed_at: Option<DateTime>,
    pub dismissed_by: Option<SimpleUser>,
    pub dismissed_at: Option<DateTime>,
    pub dismissed_reason: Option<String>,
    pub rule: CodeScanningAlertRule,
    pub tool: Tool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeScanningAlertRule {
    pub id: String,
    pub severity: Option<String>,
    pub description: String,
    pub full_description: Option<String>,
    pub tags: Vec<String>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub version: Option<Value>,
}

/// How widely a branch protection setting is enforced
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MultiLevelConfiguration {
    Off,
    NonAdmins,
    Everyone,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchProtectionRule {
    pub id: u64,
    pub repository_id: u64,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub pull_request_reviews_enforcement_level: MultiLevelConfiguration,
    pub required_approving_review_count: u64,
    pub dismiss_stale_reviews_on_push: bool,
    pub require_code_owner_review: bool,
    pub authorized_dismissal_actors_only: bool,
    pub ignore_approvals_from_contributors: bool,
    pub required_status_checks: Vec<String>,
    pub required_status_checks_enforcement_level: MultiLevelConfiguration,
    pub strict_required_status_checks_policy: bool,
    pub signature_requirement_enforcement_level: MultiLevelConfiguration,
    pub linear_history_requirement_enforcement_level: MultiLevelConfiguration,
    pub admin_enforced: bool,
    pub allow_force_pushes_enforcement_level: MultiLevelConfiguration,
    pub allow_deletions_enforcement_level: MultiLevelConfiguration,
    pub merge_queue_enforcement_level: MultiLevelConfiguration,
    pub required_deployments_enforcement_level: MultiLevelConfiguration,
    pub required_conversation_resolution_level: MultiLevelConfiguration,
    pub authorized_actors_only: bool,
    pub authorized_actor_names: Vec<String>,
}

/// A wiki page touched by a gollum event
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page_name: String,
    pub title: String,
    pub summary: Option<String>,
    pub action: String,
    pub sha: String,
    pub html_url: String,
}
