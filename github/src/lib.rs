//! Types for Github's v3 API and webhooks, plus the request layer to call the API with
//! https://docs.github.com/en/developers/webhooks-and-events/webhooks/webhook-events-and-payloads
//! https://docs.github.com/en/rest

pub mod builders;
pub mod client;
mod commits;
mod common;
mod deployment;
mod discussion;
pub mod events;
mod gist;
mod issues;
mod keys;
mod organization;
mod project;
mod pull_request;
mod reactions;
mod release;
mod repo;
mod search;
mod security_advisory;
mod user;
mod util;
mod webhook;
mod workflow;

pub use commits::*;
pub use common::*;
pub use deployment::*;
pub use discussion::*;
pub use events::{Event, EventTypes};
pub use gist::*;
pub use issues::*;
pub use keys::*;
pub use organization::*;
pub use project::*;
pub use pull_request::*;
pub use reactions::*;
pub use release::*;
pub use repo::*;
pub use search::*;
pub use security_advisory::*;
pub use user::*;
pub use util::owner_and_repo;
pub use webhook::*;
pub use workflow::*;
