use crate::{
    client::{fetch, Method, Pagination, Request, Requester, Result},
    Commit, CommitComment,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCommitsBody {
    /// SHA or branch to start listing commits from
    pub sha: Option<String>,
    /// Only commits containing this file path
    pub path: Option<String>,
    /// GitHub login or email address
    pub author: Option<String>,
    /// ISO 8601 timestamp
    pub since: Option<String>,
    /// ISO 8601 timestamp
    pub until: Option<String>,
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitCommentBody {
    pub body: String,
    /// Relative path of the file to comment on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Line index in the diff to comment on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

/// `CommitsClient` handles communication with the commit related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/commits
pub struct CommitsClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> CommitsClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// Get a single commit by sha, branch or tag name
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/commits/commits#get-a-commit
    pub async fn get(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        options: Option<&Pagination>,
    ) -> Result<Commit> {
        fetch(self.inner, get_request(owner, repo, reference, options)?).await
    }

    /// List commits
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/commits/commits#list-commits
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: Option<&GetCommitsBody>,
    ) -> Result<Vec<Commit>> {
        let url = format!("repos/{}/{}/commits", owner, repo);
        let request = Request::new(Method::Get, url).query(&options)?;
        fetch(self.inner, request).await
    }

    /// Create a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/commits/comments#create-a-commit-comment
    pub async fn comment(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        comment: &CommitCommentBody,
    ) -> Result<CommitComment> {
        fetch(self.inner, comment_request(owner, repo, sha, comment)?).await
    }
}

pub(crate) fn get_request(
    owner: &str,
    repo: &str,
    reference: &str,
    options: Option<&Pagination>,
) -> Result<Request> {
    let url = format!("repos/{}/{}/commits/{}", owner, repo, reference);
    Request::new(Method::Get, url).query(&options)
}

pub(crate) fn comment_request(
    owner: &str,
    repo: &str,
    sha: &str,
    comment: &CommitCommentBody,
) -> Result<Request> {
    let url = format!("repos/{}/{}/commits/{}/comments", owner, repo, sha);
    Request::new(Method::Post, url).json(comment)
}
