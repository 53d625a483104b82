use crate::{Change, PullRequest, RepoEventInfo, Review, ReviewComment, SimpleTeam, SimpleUser};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub action: PullRequestAction,
    pub number: u64,
    pub pull_request: PullRequest,
    pub changes: Option<IssueChanges>,
    pub label: Option<crate::Label>,
    pub assignee: Option<SimpleUser>,
    pub requested_reviewer: Option<SimpleUser>,
    pub requested_team: Option<SimpleTeam>,
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

impl PullRequestEvent {
    /// Whether the pull request was merged, as opposed to just closed
    pub fn is_merge(&self) -> bool {
        self.action == PullRequestAction::Closed && self.pull_request.merged
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PullRequestAction {
    Assigned,
    AutoMergeDisabled,
    AutoMergeEnabled,
    Closed,
    ConvertedToDraft,
    Edited,
    Labeled,
    Locked,
    Opened,
    ReadyForReview,
    Reopened,
    ReviewRequested,
    ReviewRequestRemoved,
    Synchronize,
    Unassigned,
    Unlabeled,
    Unlocked,
}

/// Previous title and body of an edited issue or pull request
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueChanges {
    pub title: Option<Change>,
    pub body: Option<Change>,
}

/// Previous body of an edited comment or review
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentChanges {
    pub body: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequestReviewEvent {
    pub action: PullRequestReviewAction,
    pub changes: Option<CommentChanges>,
    pub pull_request: PullRequest,
    pub review: Review,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PullRequestReviewAction {
    Submitted,
    Edited,
    Dismissed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequestReviewCommentEvent {
    pub action: PullRequestReviewCommentAction,
    pub changes: Option<CommentChanges>,
    pub pull_request: PullRequest,
    pub comment: ReviewComment,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PullRequestReviewCommentAction {
    Created,
    Edited,
    Deleted,
}

repo_origin!(
    PullRequestEvent,
    PullRequestReviewEvent,
    PullRequestReviewCommentEvent,
);
