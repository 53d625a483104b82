use crate::{
    CheckRun, CheckSuite, CodeScanningAlert, Deployment, DeploymentStatus, PageBuild,
    RepoEventInfo, Workflow, WorkflowJob, WorkflowRun,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckRunEvent {
    pub action: CheckRunAction,
    pub check_run: CheckRun,
    pub requested_action: Option<RequestedAction>,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckRunAction {
    Created,
    Completed,
    Rerequested,
    RequestedAction,
}

/// The button a user pressed on a check run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestedAction {
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckSuiteEvent {
    pub action: CheckSuiteAction,
    pub check_suite: CheckSuite,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckSuiteAction {
    Completed,
    Requested,
    Rerequested,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeScanningAlertEvent {
    pub action: CodeScanningAlertAction,
    pub alert: CodeScanningAlert,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub commit_oid: String,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CodeScanningAlertAction {
    Created,
    ReopenedByUser,
    ClosedByUser,
    Fixed,
    AppearedInBranch,
    Reopened,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentEvent {
    pub action: DeploymentAction,
    pub deployment: Deployment,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentAction {
    Created,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStatusEvent {
    pub action: DeploymentStatusAction,
    pub deployment_status: DeploymentStatus,
    pub deployment: Deployment,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeploymentStatusAction {
    Created,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageBuildEvent {
    pub id: u64,
    pub build: PageBuild,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDispatchEvent {
    pub inputs: Option<Value>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub workflow: String,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowJobEvent {
    pub action: WorkflowJobAction,
    pub workflow_job: WorkflowJob,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowJobAction {
    Queued,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRunEvent {
    pub action: WorkflowRunAction,
    pub workflow_run: WorkflowRun,
    pub workflow: Workflow,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowRunAction {
    Requested,
    InProgress,
    Completed,
}

repo_origin!(
    CheckRunEvent,
    CheckSuiteEvent,
    CodeScanningAlertEvent,
    DeploymentEvent,
    DeploymentStatusEvent,
    PageBuildEvent,
    WorkflowDispatchEvent,
    WorkflowJobEvent,
    WorkflowRunEvent,
);
