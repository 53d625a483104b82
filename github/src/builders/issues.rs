use super::{require, Builder};
use crate::{
    client::{
        issues::{create_request, list_request},
        CreateIssueBody, Direction, GetIssuesBody, Request, Result, StateFilter,
    },
    Issue,
};

/// List repository issues.
///
/// GitHub considers every pull request an issue, so the result contains pull requests too.
/// They can be told apart with [`Issue::is_pull_request`].
///
/// GitHub API docs: https://docs.github.com/en/rest/issues/issues#list-repository-issues
#[derive(Clone, Debug, Default)]
pub struct GetIssuesBuilder {
    owner: String,
    repo: String,
    body: GetIssuesBody,
}

impl GetIssuesBuilder {
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

    pub fn milestone<T: Into<String>>(mut self, milestone: T) -> Self {
        self.body.milestone = Some(milestone.into());
        self
    }

    pub fn state(mut self, state: StateFilter) -> Self {
        self.body.state = Some(state);
        self
    }

    pub fn assignee<T: Into<String>>(mut self, assignee: T) -> Self {
        self.body.assignee = Some(assignee.into());
        self
    }

    pub fn creator<T: Into<String>>(mut self, creator: T) -> Self {
        self.body.creator = Some(creator.into());
        self
    }

    pub fn mentioned<T: Into<String>>(mut self, mentioned: T) -> Self {
        self.body.mentioned = Some(mentioned.into());
        self
    }

    pub fn label<T: Into<String>>(mut self, label: T) -> Self {
        self.body.labels.push(label.into());
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

    pub fn since<T: Into<String>>(mut self, since: T) -> Self {
        self.body.since = Some(since.into());
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

impl Builder for GetIssuesBuilder {
    type Response = Vec<Issue>;

    fn request(&self) -> Result<Request> {
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        list_request(&self.owner, &self.repo, Some(&self.body))
    }
}

/// Open a new issue
///
/// GitHub API docs: https://docs.github.com/en/rest/issues/issues#create-an-issue
#[derive(Clone, Debug, Default)]
pub struct CreateIssueBuilder {
    owner: String,
    repo: String,
    body: CreateIssueBody,
}

impl CreateIssueBuilder {
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

    pub fn title<T: Into<String>>(mut self, title: T) -> Self {
        self.body.title = title.into();
        self
    }

    pub fn body<T: Into<String>>(mut self, body: T) -> Self {
        self.body.body = Some(body.into());
        self
    }

    pub fn milestone(mut self, milestone: u64) -> Self {
        self.body.milestone = Some(milestone);
        self
    }

    pub fn label<T: Into<String>>(mut self, label: T) -> Self {
        self.body.labels.push(label.into());
        self
    }

    pub fn assignee<T: Into<String>>(mut self, assignee: T) -> Self {
        self.body.assignees.push(assignee.into());
        self
    }
}

impl Builder for CreateIssueBuilder {
    type Response = Issue;

    fn request(&self) -> Result<Request> {
        if self.body.title.is_empty() {
            return Err("an issue needs a title".into());
        }
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        create_request(&self.owner, &self.repo, &self.body)
    }
}
