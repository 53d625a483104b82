use super::{events::HeadCommit, DateTime, Repository, SimpleUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Requested,
    Queued,
    InProgress,
    Completed,
    Waiting,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    ActionRequired,
    Cancelled,
    Failure,
    Neutral,
    Success,
    Skipped,
    Stale,
    StartupFailure,
    TimedOut,
}

impl Conclusion {
    pub fn is_success(self) -> bool {
        matches!(self, Conclusion::Success | Conclusion::Neutral | Conclusion::Skipped)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub path: String,
    pub state: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub url: String,
    pub html_url: String,
    pub badge_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: Option<String>,
    pub node_id: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub run_number: u64,
    #[serde(default)]
    pub run_attempt: u64,
    pub event: String,
    pub status: Option<CheckStatus>,
    pub conclusion: Option<Conclusion>,
    pub workflow_id: u64,
    pub check_suite_id: Option<u64>,
    pub check_suite_node_id: Option<String>,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub pull_requests: Vec<Value>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub run_started_at: Option<DateTime>,
    pub jobs_url: String,
    pub logs_url: String,
    pub check_suite_url: String,
    pub artifacts_url: String,
    pub cancel_url: String,
    pub rerun_url: String,
    pub previous_attempt_url: Option<String>,
    pub workflow_url: String,
    pub head_commit: Option<HeadCommit>,
    pub repository: Option<Repository>,
    pub head_repository: Option<Repository>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowJob {
    pub id: u64,
    pub run_id: u64,
    pub run_url: String,
    pub run_attempt: u64,
    pub node_id: String,
    pub head_sha: String,
    pub url: String,
    pub html_url: Option<String>,
    pub status: String,
    pub conclusion: Option<Conclusion>,
    pub started_at: DateTime,
    pub completed_at: Option<DateTime>,
    pub name: String,
    pub steps: Vec<Step>,
    pub check_run_url: String,
    pub labels: Vec<String>,
    pub runner_id: Option<u64>,
    pub runner_name: Option<String>,
    pub runner_group_id: Option<u64>,
    pub runner_group_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub name: String,
    pub status: String,
    pub conclusion: Option<Conclusion>,
    pub number: u64,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRun {
    pub id: u64,
    pub name: String,
    pub node_id: String,
    pub head_sha: String,
    pub external_id: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub details_url: Option<String>,
    pub status: Option<CheckStatus>,
    pub conclusion: Option<Conclusion>,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub output: Output,
    pub check_suite: Option<CheckSuite>,
    pub app: Option<App>,
    pub pull_requests: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub text: Option<String>,
    pub annotations_count: u64,
    pub annotations_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSuite {
    pub id: u64,
    pub node_id: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub status: Option<CheckStatus>,
    pub conclusion: Option<Conclusion>,
    pub url: String,
    pub before: Option<String>,
    pub after: Option<String>,
    pub pull_requests: Vec<Value>,
    pub app: Option<App>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// A GitHub App
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub id: u64,
    pub slug: Option<String>,
    pub node_id: String,
    pub owner: Option<SimpleUser>,
    pub name: String,
    pub description: Option<String>,
    pub external_url: String,
    pub html_url: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub permissions: Permissions,
    pub events: Vec<String>,
}

/// Access levels granted to an app, `read` or `write` when present
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub actions: Option<String>,
    pub administration: Option<String>,
    pub checks: Option<String>,
    pub contents: Option<String>,
    pub deployments: Option<String>,
    pub discussions: Option<String>,
    pub issues: Option<String>,
    pub metadata: Option<String>,
    pub organization_packages: Option<String>,
    pub packages: Option<String>,
    pub pages: Option<String>,
    pub pull_requests: Option<String>,
    pub repository_hooks: Option<String>,
    pub repository_projects: Option<String>,
    pub security_events: Option<String>,
    pub statuses: Option<String>,
    pub vulnerability_alerts: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBuild {
    pub url: String,
    pub status: String,
    pub error: PageBuildError,
    pub pusher: Option<SimpleUser>,
    pub commit: String,
    pub duration: u64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageBuildError {
    pub message: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{CheckRun, CheckStatus, Conclusion, WorkflowJob};

    #[test]
    fn check_run() {
        const JSON: &str = r#"
            {
                "id": 128620228,
                "node_id": "MDg6Q2hlY2tSdW4xMjg2MjAyMjg=",
                "head_sha": "ec26c3e57ca3a959ca5aad62de7213c562f8c821",
                "external_id": "",
                "url": "https://api.github.com/repos/Codertocat/Hello-World/check-runs/128620228",
                "status": "completed",
                "conclusion": "success",
                "started_at": "2019-05-15T15:21:12Z",
                "completed_at": "2019-05-15T15:21:45Z",
                "output": {
                    "title": null,
                    "summary": null,
                    "text": null,
                    "annotations_count": 0,
                    "annotations_url": "https://api.github.com/repos/Codertocat/Hello-World/check-runs/128620228/annotations"
                },
                "name": "Octocoders-linter",
                "check_suite": { "id": 118578147, "head_sha": "ec26c3e57ca3a959ca5aad62de7213c562f8c821", "status": "completed", "conclusion": "success" },
                "app": { "id": 29310, "slug": "octocoders-linter", "name": "octocoders-linter", "permissions": { "checks": "write" } },
                "pull_requests": []
            }
        "#;

        let run: CheckRun = serde_json::from_str(JSON).unwrap();
        assert_eq!(run.status, Some(CheckStatus::Completed));
        assert!(run.conclusion.map_or(false, Conclusion::is_success));
        assert_eq!(
            run.app.and_then(|app| app.permissions.checks).as_deref(),
            Some("write")
        );
        assert_eq!(run.check_suite.map(|suite| suite.id), Some(118578147));
    }

    #[test]
    fn empty_workflow_job() {
        let job: WorkflowJob = serde_json::from_str("{}").unwrap();
        assert_eq!(job, WorkflowJob::default());
        assert!(job.steps.is_empty());
    }
}
