//! Building blocks for GitHub bots: an event handler with one hook per webhook event, the
//! commands those hooks return and the client that carries them out.

mod client;
mod client_builder;
mod command;
mod config;
mod error;
mod handler;

pub use client::{Client, GitHubClient};
pub use client_builder::ClientBuilder;
pub use command::{BoxFuture, Command};
pub use config::{Authorization, Config, ConfigError};
pub use error::{Error, Result};
pub use handler::{DefaultEventHandler, EventHandler};

pub use github;
