use crate::client::{fetch, Method, Request, Requester, Result};
use serde_json::Value;

/// `MiscClient` handles the API methods that don't belong to any resource.
///
/// GitHub API docs: https://docs.github.com/en/rest/meta
pub struct MiscClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> MiscClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// A random sentence from GitHub's design philosophy, as plain text
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/meta#get-the-zen-of-github
    pub async fn zen(&self) -> Result<String> {
        self.inner.send(Request::new(Method::Get, "zen")).await
    }

    /// The url templates of the API root
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/meta#github-api-root
    pub async fn api_info(&self) -> Result<Value> {
        fetch(self.inner, Request::new(Method::Get, "")).await
    }
}
