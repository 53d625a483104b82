use crate::{
    client::{fetch, Method, Pagination, Request, Requester, Result},
    Gist,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileContents {
    pub content: String,
}

impl<T: Display> From<T> for FileContents {
    fn from(content: T) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGistBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
    pub files: BTreeMap<String, FileContents>,
}

/// Files left out of `files` keep their previous contents
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchGistBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, FileContents>,
}

/// `GistsClient` handles communication with the gist related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/gists
pub struct GistsClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> GistsClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// List the public gists of `user`
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/gists/gists#list-gists-for-a-user
    pub async fn list_for_user(
        &self,
        user: &str,
        options: Option<&Pagination>,
    ) -> Result<Vec<Gist>> {
        fetch(self.inner, list_for_user_request(user, options)?).await
    }

    /// Create a gist
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/gists/gists#create-a-gist
    pub async fn create(&self, gist: &CreateGistBody) -> Result<Gist> {
        fetch(self.inner, create_request(gist)?).await
    }

    /// Update a gist's description or files
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/gists/gists#update-a-gist
    pub async fn update(&self, gist_id: &str, gist: &PatchGistBody) -> Result<Gist> {
        fetch(self.inner, update_request(gist_id, gist)?).await
    }
}

pub(crate) fn list_for_user_request(user: &str, options: Option<&Pagination>) -> Result<Request> {
    Request::new(Method::Get, format!("users/{}/gists", user)).query(&options)
}

pub(crate) fn create_request(gist: &CreateGistBody) -> Result<Request> {
    Request::new(Method::Post, "gists").json(gist)
}

pub(crate) fn update_request(gist_id: &str, gist: &PatchGistBody) -> Result<Request> {
    Request::new(Method::Patch, format!("gists/{}", gist_id)).json(gist)
}
