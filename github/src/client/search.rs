use crate::{
    client::{fetch, Method, Request, Requester, Result},
    IssueSearchResultItem, RepoSearchResultItem, Sort,
};
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRepositoriesResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<RepoSearchResultItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIssuesResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<IssueSearchResultItem>,
}

/// Repository search. Range qualifiers whose end is `usize::MAX` are open ended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchRepositoriesBody {
    pub query: String,
    pub language: Option<String>,
    pub topic: Option<String>,
    pub size: Option<Range<usize>>,
    pub followers: Option<Range<usize>>,
    pub forks: Option<Range<usize>>,
    pub stars: Option<Range<usize>>,
    pub topics: Option<Range<usize>>,
    pub help_wanted_issues: Option<Range<usize>>,
    pub good_first_issues: Option<Range<usize>>,
    pub sort: Option<Sort>,
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

impl SearchRepositoriesBody {
    /// The `q` parameter: the free text followed by every qualifier that is set
    pub fn q(&self) -> String {
        let mut q = Qualifiers::new(&self.query);
        q.value("language", self.language.as_deref());
        q.value("topic", self.topic.as_deref());
        q.range("size", &self.size);
        q.range("followers", &self.followers);
        q.range("forks", &self.forks);
        q.range("stars", &self.stars);
        q.range("topics", &self.topics);
        q.range("help-wanted-issues", &self.help_wanted_issues);
        q.range("good-first-issues", &self.good_first_issues);
        q.sort(self.sort);
        q.finish()
    }
}

/// Issue and pull request search. Range qualifiers whose end is `usize::MAX` are open ended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchIssuesBody {
    pub query: String,
    pub comments: Option<Range<usize>>,
    pub interactions: Option<Range<usize>>,
    pub reactions: Option<Range<usize>>,
    pub sort: Option<Sort>,
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

impl SearchIssuesBody {
    /// The `q` parameter: the free text followed by every qualifier that is set
    pub fn q(&self) -> String {
        let mut q = Qualifiers::new(&self.query);
        q.range("comments", &self.comments);
        q.range("interactions", &self.interactions);
        q.range("reactions", &self.reactions);
        q.sort(self.sort);
        q.finish()
    }
}

struct Qualifiers(Vec<String>);

impl Qualifiers {
    fn new(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Qualifiers(Vec::new())
        } else {
            Qualifiers(vec![query.to_owned()])
        }
    }

    fn value(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.0.push(format!("{}:{}", name, value));
        }
    }

    fn range(&mut self, name: &str, range: &Option<Range<usize>>) {
        match range {
            Some(range) if range.end == usize::MAX => {
                self.0.push(format!("{}:>={}", name, range.start))
            }
            Some(range) => self.0.push(format!("{}:{}..{}", name, range.start, range.end)),
            None => {}
        }
    }

    fn sort(&mut self, sort: Option<Sort>) {
        if let Some(sort) = sort {
            self.0.push(format!("sort:{}", sort));
        }
    }

    fn finish(self) -> String {
        self.0.join(" ")
    }
}

#[derive(Serialize)]
struct SearchQuery {
    q: String,
    per_page: Option<u8>,
    page: Option<u32>,
}

/// `SearchClient` handles communication with the search related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/search
pub struct SearchClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> SearchClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// GitHub API docs: https://docs.github.com/en/rest/search#search-repositories
    pub async fn repositories(
        &self,
        search: &SearchRepositoriesBody,
    ) -> Result<SearchRepositoriesResponse> {
        fetch(self.inner, repositories_request(search)?).await
    }

    /// GitHub API docs: https://docs.github.com/en/rest/search#search-issues-and-pull-requests
    pub async fn issues(&self, search: &SearchIssuesBody) -> Result<SearchIssuesResponse> {
        fetch(self.inner, issues_request(search)?).await
    }
}

pub(crate) fn repositories_request(search: &SearchRepositoriesBody) -> Result<Request> {
    let query = SearchQuery {
        q: search.q(),
        per_page: search.per_page,
        page: search.page,
    };
    Request::new(Method::Get, "search/repositories").query(&query)
}

pub(crate) fn issues_request(search: &SearchIssuesBody) -> Result<Request> {
    let query = SearchQuery {
        q: search.q(),
        per_page: search.per_page,
        page: search.page,
    };
    Request::new(Method::Get, "search/issues").query(&query)
}

#[cfg(test)]
mod test {
    use super::{SearchIssuesBody, SearchRepositoriesBody};
    use crate::{
        client::{test::Recorder, RequesterExt},
        Sort,
    };

    #[test]
    fn repository_qualifiers() {
        let search = SearchRepositoriesBody {
            query: "doom".to_owned(),
            language: Some("rust".to_owned()),
            topic: Some("game".to_owned()),
            stars: Some(1000..usize::MAX),
            forks: Some(20..30),
            ..Default::default()
        };

        assert_eq!(
            search.q(),
            "doom language:rust topic:game forks:20..30 stars:>=1000"
        );
    }

    #[test]
    fn issue_qualifiers() {
        let search = SearchIssuesBody {
            query: "[feature request]".to_owned(),
            comments: Some(1..50),
            reactions: Some(50..usize::MAX),
            sort: Some(Sort::ReactionsThumbsUp),
            ..Default::default()
        };

        assert_eq!(
            search.q(),
            "[feature request] comments:1..50 reactions:>=50 sort:reactions-+1"
        );
        assert_eq!(SearchIssuesBody::default().q(), "");
    }

    #[tokio::test]
    async fn search_issues() {
        let requester = Recorder::responding(&format!(
            r#"{{ "total_count": 1, "incomplete_results": false, "items": [{}] }}"#,
            include_str!("../../test-input/issue.json").replacen('{', r#"{ "score": 1.0, "#, 1)
        ));
        let search = SearchIssuesBody {
            query: "crash".to_owned(),
            per_page: Some(5),
            ..Default::default()
        };

        let found = requester.search().issues(&search).await.unwrap();
        assert_eq!(found.total_count, 1);
        assert_eq!(found.items[0].issue.number, 1347);

        let request = requester.last();
        assert_eq!(request.path, "search/issues");
        assert_eq!(
            request.query,
            vec![
                ("per_page".to_owned(), "5".to_owned()),
                ("q".to_owned(), "crash".to_owned()),
            ]
        );
    }
}
