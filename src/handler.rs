//! The trait a bot implements to react to webhook payloads

use crate::{client::GitHubClient, command::Command, Client};
use async_trait::async_trait;
use github::events;
use std::{fmt::Debug, sync::Arc};

macro_rules! event_handler {
    ($($hook:ident => $payload:ident,)*) => {
        /// Reacts to GitHub events.
        ///
        /// Every hook receives the client and a decoded payload and returns the work to do as a
        /// [`Command`]. Hooks that are not overridden do nothing. Deciding which hook a delivery
        /// goes to is up to the caller.
        #[async_trait]
        #[allow(unused_variables)]
        pub trait EventHandler: Send + Sync {
            type Message: Debug + Send;
            type GitHubClient: GitHubClient + Send + Sync;

            /// Receives the output of every future performed on behalf of this handler
            async fn message(&self, message: Self::Message) {}

            $(
                #[doc = concat!("Called with a [`", stringify!($payload), "`](events::", stringify!($payload), ")")]
                async fn $hook(
                    &self,
                    github_client: Arc<Self::GitHubClient>,
                    payload: events::$payload,
                ) -> Command<Self::Message> {
                    Command::none()
                }
            )*
        }
    };
}

event_handler! {
    github_app_authorization_event => AppAuthorizationEvent,
    installation_event => InstallationEvent,
    installation_repositories_event => InstallationRepositoriesEvent,
    gollum_event => GollumEvent,
    deploy_key_event => DeployKeyEvent,
    member_event => MemberEvent,
    milestone_event => MilestoneEvent,
    public_event => PublicEvent,
    release_event => ReleaseEvent,
    repository_event => RepositoryEvent,
    repository_dispatch_event => RepositoryDispatchEvent,
    repository_import_event => RepositoryImportEvent,
    repository_vulnerability_alert_event => RepositoryVulnerabilityAlertEvent,
    secret_scanning_alert_event => SecretScanningAlertEvent,
    security_advisory_event => SecurityAdvisoryEvent,
    star_event => StarEvent,
    watch_event => WatchEvent,
    pull_request_event => PullRequestEvent,
    pull_request_review_event => PullRequestReviewEvent,
    pull_request_review_comment_event => PullRequestReviewCommentEvent,
    commit_comment_event => CommitCommentEvent,
    push_event => PushEvent,
    status_event => StatusEvent,
    issue_comment_event => IssueCommentEvent,
    issues_event => IssuesEvent,
    label_event => LabelEvent,
    discussion_event => DiscussionEvent,
    discussion_comment_event => DiscussionCommentEvent,
    branch_protection_rule_event => BranchProtectionRuleEvent,
    create_event => CreateEvent,
    delete_event => DeleteEvent,
    fork_event => ForkEvent,
    check_run_event => CheckRunEvent,
    check_suite_event => CheckSuiteEvent,
    code_scanning_alert_event => CodeScanningAlertEvent,
    deployment_event => DeploymentEvent,
    deployment_status_event => DeploymentStatusEvent,
    page_build_event => PageBuildEvent,
    workflow_dispatch_event => WorkflowDispatchEvent,
    workflow_job_event => WorkflowJobEvent,
    workflow_run_event => WorkflowRunEvent,
    membership_event => MembershipEvent,
    org_block_event => OrgBlockEvent,
    organization_event => OrganizationEvent,
    team_event => TeamEvent,
    team_add_event => TeamAddEvent,
    project_event => ProjectEvent,
    project_card_event => ProjectCardEvent,
    project_column_event => ProjectColumnEvent,
    marketplace_purchase_event => MarketplacePurchaseEvent,
    meta_event => MetaEvent,
    package_event => PackageEvent,
    ping_event => PingEvent,
    sponsorship_event => SponsorshipEvent,
}

/// A handler with no hooks, for clients that are only used to call the API
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {
    type Message = ();
    type GitHubClient = Client<Self>;
}
