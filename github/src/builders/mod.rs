//! Builders for the API methods that take many optional parameters.
//!
//! A builder describes one call. `request()` turns it into a [`Request`] without sending it,
//! `execute()` sends it through a [`Requester`] and decodes the response.

use crate::client::{fetch, Request, Requester, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

mod commits;
mod gists;
mod issues;
mod pulls;
mod search;

pub use commits::{CommentReactionBuilder, CommitCommentBuilder};
pub use gists::{CreateGistBuilder, GetGistsBuilder, PatchGistBuilder};
pub use issues::{CreateIssueBuilder, GetIssuesBuilder};
pub use pulls::GetPullsBuilder;
pub use search::{SearchIssuesBuilder, SearchRepositoriesBuilder};

#[async_trait]
pub trait Builder: Sized + Send {
    type Response: DeserializeOwned + Send;

    fn request(&self) -> Result<Request>;

    async fn execute<R>(self, requester: &R) -> Result<Self::Response>
    where
        R: Requester + ?Sized,
    {
        let request = self.request()?;
        fetch(requester, request).await
    }
}

/// Fail with "`what` is required" when `value` was never set
fn require(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(format!("{} is required", what).into());
    }
    Ok(())
}
