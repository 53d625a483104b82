use crate::{
    client::{fetch, Direction, Method, Request, Requester, Result, StateFilter},
    SimplePullRequest,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPullsBody {
    pub state: Option<StateFilter>,
    /// Filter by head user or organization and branch, as `user:ref-name`
    pub head: Option<String>,
    /// Filter by base branch name
    pub base: Option<String>,
    /// One of `created`, `updated`, `popularity` or `long-running`
    pub sort: Option<String>,
    pub direction: Option<Direction>,
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

/// `PullsClient` handles communication with the pull request related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/pulls
pub struct PullsClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> PullsClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// List pull requests
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/pulls/pulls#list-pull-requests
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: Option<&GetPullsBody>,
    ) -> Result<Vec<SimplePullRequest>> {
        fetch(self.inner, list_request(owner, repo, options)?).await
    }
}

pub(crate) fn list_request(
    owner: &str,
    repo: &str,
    options: Option<&GetPullsBody>,
) -> Result<Request> {
    let url = format!("repos/{}/{}/pulls", owner, repo);
    Request::new(Method::Get, url).query(&options)
}
