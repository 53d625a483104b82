use crate::SimpleUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

/// Someone revoked their authorization of a GitHub App
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppAuthorizationEvent {
    pub action: AppAuthorizationAction,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AppAuthorizationAction {
    Revoked,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstallationEvent {
    pub action: InstallationAction,
    #[serde(default)]
    pub repositories: Vec<RepoInfo>,
    pub installation: Value,
    pub requester: Option<SimpleUser>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstallationAction {
    Created,
    Deleted,
    Suspend,
    Unsuspend,
    NewPermissionsAccepted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstallationRepositoriesEvent {
    pub action: InstallationRepositoriesAction,
    pub repository_selection: RepositorySelection,
    #[serde(default)]
    pub repositories_added: Vec<RepoInfo>,
    #[serde(default)]
    pub repositories_removed: Vec<RepoInfo>,
    pub installation: Value,
    pub requester: Option<SimpleUser>,
    pub sender: SimpleUser,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstallationRepositoriesAction {
    Added,
    Removed,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepositorySelection {
    Selected,
    All,
}

/// The short form of a repository listed in installation payloads
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub private: bool,
}

user_origin!(
    AppAuthorizationEvent,
    InstallationEvent,
    InstallationRepositoriesEvent,
);
