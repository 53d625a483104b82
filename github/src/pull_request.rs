use super::{Association, DateTime, Label, Milestone, Repository, SimpleTeam, SimpleUser};
use serde::{Deserialize, Serialize};

/// A pull request as it appears in list responses
///
/// GitHub API docs: https://docs.github.com/en/rest/pulls/pulls#list-pull-requests
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplePullRequest {
    pub url: String,
    pub id: u64,
    pub node_id: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub issue_url: String,
    pub commits_url: String,
    pub review_comments_url: String,
    pub review_comment_url: String,
    pub comments_url: String,
    pub statuses_url: String,
    pub number: u64,
    #[serde(default)]
    pub state: PullRequestState,
    pub locked: bool,
    pub title: String,
    pub user: Option<SimpleUser>,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub active_lock_reason: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub closed_at: Option<DateTime>,
    pub merged_at: Option<DateTime>,
    pub merge_commit_sha: Option<String>,
    pub assignee: Option<SimpleUser>,
    #[serde(default)]
    pub assignees: Vec<SimpleUser>,
    #[serde(default)]
    pub requested_reviewers: Vec<SimpleUser>,
    #[serde(default)]
    pub requested_teams: Vec<SimpleTeam>,
    pub head: HeadBase,
    pub base: HeadBase,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(default)]
    pub author_association: Association,
    pub auto_merge: Option<AutoMerge>,
    #[serde(default)]
    pub draft: bool,
}

impl SimplePullRequest {
    pub fn is_open(&self) -> bool {
        self.state == PullRequestState::Open
    }

    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// A single pull request, as returned when fetching it directly or in webhook payloads
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub merged: bool,
    pub mergeable: Option<bool>,
    pub rebaseable: Option<bool>,
    pub mergeable_state: Option<String>,
    pub merged_by: Option<SimpleUser>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub review_comments: u64,
    #[serde(default)]
    pub maintainer_can_modify: bool,
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changed_files: u64,
    #[serde(flatten)]
    pub shared: SimplePullRequest,
}

impl std::ops::Deref for PullRequest {
    type Target = SimplePullRequest;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    Closed,
    Open,
}

impl Default for PullRequestState {
    fn default() -> Self {
        PullRequestState::Closed
    }
}

/// One side of a pull request: the branch being merged or the branch merged into
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadBase {
    pub label: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    pub user: Option<SimpleUser>,
    pub repo: Option<Repository>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: HRef,
    pub html: HRef,
    pub issue: HRef,
    pub comments: HRef,
    pub review_comments: HRef,
    pub review_comment: HRef,
    pub commits: HRef,
    pub statuses: HRef,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HRef {
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoMerge {
    pub enabled_by: SimpleUser,
    pub merge_method: String,
    pub commit_title: Option<String>,
    pub commit_message: Option<String>,
}

/// A review submitted on a pull request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    pub body: Option<String>,
    pub commit_id: Option<String>,
    pub submitted_at: Option<DateTime>,
    pub state: ReviewState,
    pub html_url: String,
    pub pull_request_url: String,
    #[serde(default)]
    pub author_association: Association,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    // Webhook payloads spell states in lowercase, the REST API in uppercase
    #[serde(alias = "APPROVED")]
    Approved,
    #[serde(alias = "CHANGES_REQUESTED")]
    ChangesRequested,
    #[serde(alias = "COMMENTED")]
    Commented,
    #[serde(alias = "DISMISSED")]
    Dismissed,
    #[serde(alias = "PENDING")]
    Pending,
}

/// A comment on a line of a pull request's diff
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub url: String,
    pub pull_request_review_id: Option<u64>,
    pub id: u64,
    pub node_id: String,
    pub diff_hunk: String,
    pub path: String,
    pub position: Option<u64>,
    pub original_position: Option<u64>,
    pub commit_id: String,
    pub original_commit_id: String,
    pub in_reply_to_id: Option<u64>,
    pub user: Option<SimpleUser>,
    pub body: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub html_url: String,
    pub pull_request_url: String,
    #[serde(default)]
    pub author_association: Association,
    pub line: Option<u64>,
    pub side: Option<String>,
}
