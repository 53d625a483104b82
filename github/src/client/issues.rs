use crate::{
    client::{fetch, Method, Request, Requester, Result},
    Issue,
};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

/// State filter for list endpoints
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIssueBody {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetIssuesBody {
    /// A milestone number, `*` for any or `none`
    pub milestone: Option<String>,
    pub state: Option<StateFilter>,
    /// A login, `*` for any or `none`
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
    pub labels: Vec<String>,
    /// One of `created`, `updated` or `comments`
    pub sort: Option<String>,
    pub direction: Option<Direction>,
    /// ISO 8601 timestamp
    pub since: Option<String>,
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

/// `IssuesClient` handles communication with the issue related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/issues
pub struct IssuesClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> IssuesClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// Create an issue
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/issues/issues#create-an-issue
    pub async fn create(&self, owner: &str, repo: &str, issue: &CreateIssueBody) -> Result<Issue> {
        fetch(self.inner, create_request(owner, repo, issue)?).await
    }

    /// List repository issues. Pull requests are issues too and show up in the result.
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/issues/issues#list-repository-issues
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: Option<&GetIssuesBody>,
    ) -> Result<Vec<Issue>> {
        fetch(self.inner, list_request(owner, repo, options)?).await
    }
}

pub(crate) fn create_request(owner: &str, repo: &str, issue: &CreateIssueBody) -> Result<Request> {
    let url = format!("repos/{}/{}/issues", owner, repo);
    Request::new(Method::Post, url).json(issue)
}

pub(crate) fn list_request(
    owner: &str,
    repo: &str,
    options: Option<&GetIssuesBody>,
) -> Result<Request> {
    let url = format!("repos/{}/{}/issues", owner, repo);
    Request::new(Method::Get, url).query(&options)
}
