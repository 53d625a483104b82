use crate::{Change, OrgEventInfo, Repository, SimpleTeam, SimpleUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganizationEvent {
    pub action: OrganizationAction,
    pub invitation: Option<Value>,
    pub membership: Option<Value>,
    #[serde(flatten)]
    pub event_info: OrgEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrganizationAction {
    Deleted,
    Renamed,
    MemberAdded,
    MemberRemoved,
    MemberInvited,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamEvent {
    pub action: TeamAction,
    pub team: SimpleTeam,
    pub changes: Option<TeamChanges>,
    pub repository: Option<Repository>,
    #[serde(flatten)]
    pub event_info: OrgEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TeamAction {
    Created,
    Deleted,
    Edited,
    AddedToRepository,
    RemovedFromRepository,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamChanges {
    pub description: Option<Change>,
    pub name: Option<Change>,
    pub privacy: Option<Change>,
    pub repository: Option<Value>,
}

/// Someone was added to or removed from a team
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub action: MembershipAction,
    pub scope: MembershipScope,
    pub member: SimpleUser,
    pub team: SimpleTeam,
    #[serde(flatten)]
    pub event_info: OrgEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MembershipAction {
    Added,
    Removed,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MembershipScope {
    Team,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrgBlockEvent {
    pub action: OrgBlockAction,
    pub blocked_user: SimpleUser,
    #[serde(flatten)]
    pub event_info: OrgEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrgBlockAction {
    Blocked,
    Unblocked,
}

/// A repository was added to a team
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamAddEvent {
    pub team: SimpleTeam,
    #[serde(flatten)]
    pub event_info: crate::RepoEventInfo,
}

org_origin!(OrganizationEvent, TeamEvent, MembershipEvent, OrgBlockEvent);
repo_origin!(TeamAddEvent);
