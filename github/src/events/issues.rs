use super::{CommentChanges, IssueChanges};
use crate::{
    Change, Discussion, DiscussionComment, Issue, IssueComment, Label, Milestone, RepoEventInfo,
    SimpleUser,
};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssuesEvent {
    pub action: IssueAction,
    pub issue: Issue,
    pub changes: Option<IssueChanges>,
    pub label: Option<Label>,
    pub assignee: Option<SimpleUser>,
    pub milestone: Option<Milestone>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueAction {
    Opened,
    Edited,
    Deleted,
    Pinned,
    Unpinned,
    Closed,
    Reopened,
    Assigned,
    Unassigned,
    Labeled,
    Unlabeled,
    Locked,
    Unlocked,
    Transferred,
    Milestoned,
    Demilestoned,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    pub action: IssueCommentAction,
    pub changes: Option<CommentChanges>,
    pub issue: Issue,
    pub comment: IssueComment,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueCommentAction {
    Created,
    Edited,
    Deleted,
}

impl IssueCommentAction {
    pub fn is_created(self) -> bool {
        self == IssueCommentAction::Created
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelEvent {
    pub action: LabelAction,
    pub label: Label,
    pub changes: Option<LabelChanges>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LabelAction {
    Created,
    Edited,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelChanges {
    pub name: Option<Change>,
    pub color: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    pub action: MilestoneAction,
    pub milestone: Milestone,
    pub changes: Option<MilestoneChanges>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MilestoneAction {
    Created,
    Closed,
    /// A closed milestone was re-opened
    Opened,
    Edited,
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneChanges {
    pub title: Option<Change>,
    pub description: Option<Change>,
    pub due_on: Option<Change>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionEvent {
    pub action: DiscussionAction,
    pub discussion: Discussion,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiscussionAction {
    Created,
    Edited,
    Deleted,
    Pinned,
    Unpinned,
    Locked,
    Unlocked,
    Transferred,
    CategoryChanged,
    Answered,
    Unanswered,
    Labeled,
    Unlabeled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionCommentEvent {
    pub action: DiscussionCommentAction,
    pub comment: DiscussionComment,
    pub discussion: Discussion,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiscussionCommentAction {
    Created,
    Edited,
    Deleted,
}

repo_origin!(
    IssuesEvent,
    IssueCommentEvent,
    LabelEvent,
    MilestoneEvent,
    DiscussionEvent,
    DiscussionCommentEvent,
);
