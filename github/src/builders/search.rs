use super::Builder;
use crate::{
    client::{
        search::{issues_request, repositories_request},
        Request, Result, SearchIssuesBody, SearchIssuesResponse, SearchRepositoriesBody,
        SearchRepositoriesResponse,
    },
    Sort,
};
use std::{fmt::Display, ops::Range};

/// Search issues and pull requests.
///
/// Ranges ending at `usize::MAX` become open qualifiers such as `reactions:>=50`.
///
/// GitHub API docs: https://docs.github.com/en/rest/search#search-issues-and-pull-requests
#[derive(Clone, Debug, Default)]
pub struct SearchIssuesBuilder {
    body: SearchIssuesBody,
}

impl SearchIssuesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query<T: Into<String>>(mut self, query: T) -> Self {
        self.body.query = query.into();
        self
    }

    pub fn comments(mut self, comments: Range<usize>) -> Self {
        self.body.comments = Some(comments);
        self
    }

    pub fn interactions(mut self, interactions: Range<usize>) -> Self {
        self.body.interactions = Some(interactions);
        self
    }

    pub fn reactions(mut self, reactions: Range<usize>) -> Self {
        self.body.reactions = Some(reactions);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.body.sort = Some(sort);
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

impl Builder for SearchIssuesBuilder {
    type Response = SearchIssuesResponse;

    fn request(&self) -> Result<Request> {
        issues_request(&self.body)
    }
}

/// Search repositories
///
/// GitHub API docs: https://docs.github.com/en/rest/search#search-repositories
#[derive(Clone, Debug, Default)]
pub struct SearchRepositoriesBuilder {
    body: SearchRepositoriesBody,
}

macro_rules! range_setters {
    ($($field:ident),*) => {
        $(
            pub fn $field(mut self, $field: Range<usize>) -> Self {
                self.body.$field = Some($field);
                self
            }
        )*
    };
}

impl SearchRepositoriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query<T: Into<String>>(mut self, query: T) -> Self {
        self.body.query = query.into();
        self
    }

    pub fn language<T: Display>(mut self, language: T) -> Self {
        self.body.language = Some(language.to_string());
        self
    }

    pub fn topic<T: Display>(mut self, topic: T) -> Self {
        self.body.topic = Some(topic.to_string());
        self
    }

    range_setters!(
        size,
        followers,
        forks,
        stars,
        topics,
        help_wanted_issues,
        good_first_issues
    );

    pub fn sort(mut self, sort: Sort) -> Self {
        self.body.sort = Some(sort);
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

impl Builder for SearchRepositoriesBuilder {
    type Response = SearchRepositoriesResponse;

    fn request(&self) -> Result<Request> {
        repositories_request(&self.body)
    }
}
