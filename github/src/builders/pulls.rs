use super::{require, Builder};
use crate::{
    client::{pulls::list_request, Direction, GetPullsBody, Request, Result, StateFilter},
    SimplePullRequest,
};

/// List pull requests
///
/// GitHub API docs: https://docs.github.com/en/rest/pulls/pulls#list-pull-requests
#[derive(Clone, Debug, Default)]
pub struct GetPullsBuilder {
    owner: String,
    repo: String,
    body: GetPullsBody,
}

impl GetPullsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn repo<T: Into<String>>(mut self, repo: T) -> Self {
        self.repo = repo.into();
        self
    }

    pub fn state(mut self, state: StateFilter) -> Self {
        self.body.state = Some(state);
        self
    }

    pub fn head<T: Into<String>>(mut self, head: T) -> Self {
        self.body.head = Some(head.into());
        self
    }

    pub fn base<T: Into<String>>(mut self, base: T) -> Self {
        self.body.base = Some(base.into());
        self
    }

    pub fn sort<T: Into<String>>(mut self, sort: T) -> Self {
        self.body.sort = Some(sort.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.body.direction = Some(direction);
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.body.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.body.page = Some(page);
        self
    }
}

impl Builder for GetPullsBuilder {
    type Response = Vec<SimplePullRequest>;

    fn request(&self) -> Result<Request> {
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        list_request(&self.owner, &self.repo, Some(&self.body))
    }
}
