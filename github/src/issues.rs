use super::{Association, DateTime, ReactionRollup, SimpleUser};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub repository_url: String,
    pub labels_url: String,
    pub comments_url: String,
    pub events_url: String,
    pub html_url: String,
    pub number: u64,
    pub state: IssueState,
    pub title: String,
    pub body: Option<String>,
    pub user: Option<SimpleUser>,
    #[serde(default)]
    pub labels: Vec<StringOrLabel>,
    pub assignee: Option<SimpleUser>,
    #[serde(default)]
    pub assignees: Vec<SimpleUser>,
    pub milestone: Option<Milestone>,
    pub locked: bool,
    pub active_lock_reason: Option<String>,
    pub comments: u64,
    pub pull_request: Option<PullRequestRef>,
    pub closed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(default)]
    pub author_association: Association,
    pub reactions: Option<ReactionRollup>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(StringOrLabel::name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
}

/// Issues list their labels either as plain names or as full label objects
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrLabel {
    String(String),
    Label(Label),
}

impl StringOrLabel {
    pub fn name(&self) -> &str {
        match self {
            StringOrLabel::String(name) => name,
            StringOrLabel::Label(label) => &label.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub default: bool,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MilestoneState {
    Open,
    Closed,
}

impl Default for MilestoneState {
    fn default() -> Self {
        MilestoneState::Open
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub url: String,
    pub html_url: String,
    pub labels_url: String,
    pub id: u64,
    pub node_id: String,
    pub number: u64,
    pub state: MilestoneState,
    pub title: String,
    pub description: Option<String>,
    pub creator: Option<SimpleUser>,
    pub open_issues: u64,
    pub closed_issues: u64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub closed_at: Option<DateTime>,
    pub due_on: Option<DateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub issue_url: Option<String>,
    pub body: Option<String>,
    pub user: Option<SimpleUser>,
    #[serde(default)]
    pub author_association: Association,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub reactions: Option<ReactionRollup>,
}

impl IssueComment {
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
