use crate::{
    client::{fetch, Method, Pagination, Request, Requester, Result},
    SimpleUser,
};

/// `UsersClient` handles communication with the follower related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/users/followers
pub struct UsersClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> UsersClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    async fn list(&self, url: String, options: Option<&Pagination>) -> Result<Vec<SimpleUser>> {
        let request = Request::new(Method::Get, url).query(&options)?;
        fetch(self.inner, request).await
    }

    /// People following the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/users/followers#list-followers-of-the-authenticated-user
    pub async fn followers(&self, options: Option<&Pagination>) -> Result<Vec<SimpleUser>> {
        self.list("user/followers".to_owned(), options).await
    }

    /// People the authenticated user follows
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/users/followers#list-the-people-the-authenticated-user-follows
    pub async fn following(&self, options: Option<&Pagination>) -> Result<Vec<SimpleUser>> {
        self.list("user/following".to_owned(), options).await
    }

    /// GitHub API docs: https://docs.github.com/en/rest/users/followers#list-followers-of-a-user
    pub async fn followers_of(
        &self,
        user: &str,
        options: Option<&Pagination>,
    ) -> Result<Vec<SimpleUser>> {
        self.list(format!("users/{}/followers", user), options).await
    }

    /// GitHub API docs: https://docs.github.com/en/rest/users/followers#list-the-people-a-user-follows
    pub async fn following_of(
        &self,
        user: &str,
        options: Option<&Pagination>,
    ) -> Result<Vec<SimpleUser>> {
        self.list(format!("users/{}/following", user), options).await
    }
}
