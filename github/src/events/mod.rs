//! Webhook payloads, one struct per event type
//!
//! GitHub API docs: https://docs.github.com/en/developers/webhooks-and-events/webhooks/webhook-events-and-payloads

use crate::Repository;
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

/// The value of the `X-GitHub-Event` header of a delivery
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventTypes {
    // Apps
    GithubAppAuthorization,
    Installation,
    InstallationRepositories,

    // Wiki
    Gollum,

    // Repositories
    DeployKey,
    Member,
    Milestone,
    Public,
    Release,
    Repository,
    RepositoryDispatch,
    RepositoryImport,
    RepositoryVulnerabilityAlert,
    SecretScanningAlert,
    SecurityAdvisory,
    Star,
    Watch,

    // Pull requests
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,

    // Commits
    CommitComment,
    Push,
    Status,

    // Issues
    IssueComment,
    Issues,
    Label,

    // Discussions
    Discussion,
    DiscussionComment,

    // Branches and tags
    BranchProtectionRule,
    Create,
    Delete,
    Fork,

    // CI
    CheckRun,
    CheckSuite,
    CodeScanningAlert,
    Deployment,
    DeploymentStatus,
    PageBuild,
    WorkflowDispatch,
    WorkflowJob,
    WorkflowRun,

    // Organizations
    Membership,
    OrgBlock,
    Organization,
    Team,
    TeamAdd,

    // Projects, for both organizations and repositories
    Project,
    ProjectCard,
    ProjectColumn,

    // Marketplace
    MarketplacePurchase,

    Meta,
    Package,
    Ping,
    Sponsorship,
}

/// Where a payload originated
pub trait Origin {
    type Origin;

    fn origin(&self) -> Option<&Self::Origin>;

    /// The repository the payload was delivered for, if it concerns one
    fn repository(&self) -> Option<&Repository> {
        None
    }
}

macro_rules! repo_origin {
    ($($event:ty),* $(,)?) => {
        $(
            impl crate::events::Origin for $event {
                type Origin = crate::Repository;

                fn origin(&self) -> Option<&Self::Origin> {
                    Some(&self.event_info.repository)
                }

                fn repository(&self) -> Option<&crate::Repository> {
                    Some(&self.event_info.repository)
                }
            }
        )*
    };
}

macro_rules! optional_repo_origin {
    ($($event:ty),* $(,)?) => {
        $(
            impl crate::events::Origin for $event {
                type Origin = crate::Repository;

                fn origin(&self) -> Option<&Self::Origin> {
                    self.repository.as_ref()
                }

                fn repository(&self) -> Option<&crate::Repository> {
                    self.repository.as_ref()
                }
            }
        )*
    };
}

macro_rules! org_origin {
    ($($event:ty),* $(,)?) => {
        $(
            impl crate::events::Origin for $event {
                type Origin = crate::Organization;

                fn origin(&self) -> Option<&Self::Origin> {
                    Some(&self.event_info.organization)
                }
            }
        )*
    };
}

macro_rules! user_origin {
    ($($event:ty),* $(,)?) => {
        $(
            impl crate::events::Origin for $event {
                type Origin = crate::SimpleUser;

                fn origin(&self) -> Option<&Self::Origin> {
                    Some(&self.sender)
                }
            }
        )*
    };
}

// Declared after the origin macros so the payload modules can use them
mod apps;
mod ci;
mod commits;
mod issues;
mod misc;
mod organization;
mod pull_request;
mod repository;

pub use apps::*;
pub use ci::*;
pub use commits::*;
pub use issues::*;
pub use misc::*;
pub use organization::*;
pub use pull_request::*;
pub use repository::*;

macro_rules! events {
    ($($variant:ident => $payload:ty,)*) => {
        /// A decoded webhook payload
        #[derive(Clone, Debug)]
        #[allow(clippy::large_enum_variant)]
        pub enum Event {
            $($variant($payload),)*
        }

        impl Event {
            pub fn from_json(event_type: EventTypes, json: &[u8]) -> Result<Self, serde_json::Error> {
                let event = match event_type {
                    $(EventTypes::$variant => Event::$variant(serde_json::from_slice(json)?),)*
                };
                Ok(event)
            }

            pub fn event_type(&self) -> EventTypes {
                match self {
                    $(Event::$variant(_) => EventTypes::$variant,)*
                }
            }

            /// The repository the event was delivered for, if it concerns one
            pub fn repository(&self) -> Option<&Repository> {
                match self {
                    $(Event::$variant(payload) => Origin::repository(payload),)*
                }
            }
        }
    };
}

events! {
    GithubAppAuthorization => AppAuthorizationEvent,
    Installation => InstallationEvent,
    InstallationRepositories => InstallationRepositoriesEvent,
    Gollum => GollumEvent,
    DeployKey => DeployKeyEvent,
    Member => MemberEvent,
    Milestone => MilestoneEvent,
    Public => PublicEvent,
    Release => ReleaseEvent,
    Repository => RepositoryEvent,
    RepositoryDispatch => RepositoryDispatchEvent,
    RepositoryImport => RepositoryImportEvent,
    RepositoryVulnerabilityAlert => RepositoryVulnerabilityAlertEvent,
    SecretScanningAlert => SecretScanningAlertEvent,
    SecurityAdvisory => SecurityAdvisoryEvent,
    Star => StarEvent,
    Watch => WatchEvent,
    PullRequest => PullRequestEvent,
    PullRequestReview => PullRequestReviewEvent,
    PullRequestReviewComment => PullRequestReviewCommentEvent,
    CommitComment => CommitCommentEvent,
    Push => PushEvent,
    Status => StatusEvent,
    IssueComment => IssueCommentEvent,
    Issues => IssuesEvent,
    Label => LabelEvent,
    Discussion => DiscussionEvent,
    DiscussionComment => DiscussionCommentEvent,
    BranchProtectionRule => BranchProtectionRuleEvent,
    Create => CreateEvent,
    Delete => DeleteEvent,
    Fork => ForkEvent,
    CheckRun => CheckRunEvent,
    CheckSuite => CheckSuiteEvent,
    CodeScanningAlert => CodeScanningAlertEvent,
    Deployment => DeploymentEvent,
    DeploymentStatus => DeploymentStatusEvent,
    PageBuild => PageBuildEvent,
    WorkflowDispatch => WorkflowDispatchEvent,
    WorkflowJob => WorkflowJobEvent,
    WorkflowRun => WorkflowRunEvent,
    Membership => MembershipEvent,
    OrgBlock => OrgBlockEvent,
    Organization => OrganizationEvent,
    Team => TeamEvent,
    TeamAdd => TeamAddEvent,
    Project => ProjectEvent,
    ProjectCard => ProjectCardEvent,
    ProjectColumn => ProjectColumnEvent,
    MarketplacePurchase => MarketplacePurchaseEvent,
    Meta => MetaEvent,
    Package => PackageEvent,
    Ping => PingEvent,
    Sponsorship => SponsorshipEvent,
}
