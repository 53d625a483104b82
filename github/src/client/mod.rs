//! Request construction for the GitHub REST API.
//!
//! Nothing in this module talks to the network. Every method builds a [`Request`] and hands it
//! to a [`Requester`], which is the seam where an HTTP stack and credentials get plugged in.

use async_trait::async_trait;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

pub(crate) mod commits;
mod error;
pub(crate) mod gists;
pub(crate) mod issues;
pub(crate) mod misc;
pub(crate) mod orgs;
mod pagination;
pub(crate) mod pulls;
pub(crate) mod reactions;
pub(crate) mod search;
pub(crate) mod users;

pub use commits::{CommitCommentBody, CommitsClient, GetCommitsBody};
pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use gists::{CreateGistBody, FileContents, GistsClient, PatchGistBody};
pub use issues::{CreateIssueBody, Direction, GetIssuesBody, IssuesClient, StateFilter};
pub use misc::MiscClient;
pub use orgs::{AddToOrgBody, OrgsClient};
pub use pagination::Pagination;
pub use pulls::{GetPullsBody, PullsClient};
pub use reactions::ReactionsClient;
pub use search::{
    SearchClient, SearchIssuesBody, SearchIssuesResponse, SearchRepositoriesBody,
    SearchRepositoriesResponse,
};
pub use users::UsersClient;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";
pub const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described API call, ready to be sent by a [`Requester`]
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API base url, without a leading slash
    pub path: String,
    pub query: Vec<(String, String)>,
    /// JSON encoded body
    pub body: Option<String>,
    pub accept: String,
    pub user_agent: String,
}

impl Request {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            accept: MEDIA_TYPE_V3.to_owned(),
            user_agent: USER_AGENT.to_owned(),
        }
    }

    /// Append the fields of `params` as query parameters.
    ///
    /// `None` fields are skipped and sequences are joined with commas, which is how GitHub
    /// expects list filters like `labels` to be passed.
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self> {
        match serde_json::to_value(params)? {
            Value::Null => {}
            Value::Object(fields) => {
                for (key, value) in fields {
                    if let Some(value) = query_value(value)? {
                        self.query.push((key, value));
                    }
                }
            }
            _ => return Err("query parameters must be a struct or a map".into()),
        }

        Ok(self)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// The url this request targets when sent to `base_url`, which must end with a slash
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(base_url)?.join(&self.path)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}

fn query_value(value: Value) -> Result<Option<String>> {
    let value = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.extend(query_value(item)?);
            }
            if parts.is_empty() {
                return Ok(None);
            }
            parts.join(",")
        }
        Value::Object(_) => {
            return Err("nested objects can't be passed as query parameters".into());
        }
    };

    Ok(Some(value))
}

/// Sends requests to GitHub and returns the raw response body.
///
/// Implementations own the transport: the HTTP client, credentials, retries. A non-success
/// response should be reported with [`Error::from_response`].
#[async_trait]
pub trait Requester: Send + Sync {
    async fn send(&self, request: Request) -> Result<String>;
}

/// A `Requester` that has nowhere to send requests to
#[derive(Clone, Copy, Debug, Default)]
pub struct Disconnected;

#[async_trait]
impl Requester for Disconnected {
    async fn send(&self, request: Request) -> Result<String> {
        debug!("dropping {} {}: disconnected", request.method, request.path);
        Err(Error::Disconnected)
    }
}

/// Typed access to the API methods, available on every [`Requester`]
pub trait RequesterExt: Requester {
    fn commits(&self) -> CommitsClient<'_, Self> {
        CommitsClient::new(self)
    }

    fn reactions(&self) -> ReactionsClient<'_, Self> {
        ReactionsClient::new(self)
    }

    fn gists(&self) -> GistsClient<'_, Self> {
        GistsClient::new(self)
    }

    fn issues(&self) -> IssuesClient<'_, Self> {
        IssuesClient::new(self)
    }

    fn pulls(&self) -> PullsClient<'_, Self> {
        PullsClient::new(self)
    }

    fn users(&self) -> UsersClient<'_, Self> {
        UsersClient::new(self)
    }

    fn orgs(&self) -> OrgsClient<'_, Self> {
        OrgsClient::new(self)
    }

    fn misc(&self) -> MiscClient<'_, Self> {
        MiscClient::new(self)
    }

    fn search(&self) -> SearchClient<'_, Self> {
        SearchClient::new(self)
    }
}

impl<R: Requester + ?Sized> RequesterExt for R {}

/// Send `request` and deserialize the response body
pub(crate) async fn fetch<R, T>(requester: &R, request: Request) -> Result<T>
where
    R: Requester + ?Sized,
    T: DeserializeOwned,
{
    debug!("Github Request: {} {}", request.method, request.path);
    let payload = requester.send(request).await?;
    decode(&payload)
}

pub(crate) fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|source| {
        let content = serde_json::from_str::<Value>(payload)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| payload.to_owned());

        Error::Deserialize { source, content }
    })
}

#[cfg(test)]
pub(crate) mod test {
    use super::{
        decode, Disconnected, Error, Method, Pagination, Request, Requester, RequesterExt,
        Result,
    };
    use async_trait::async_trait;
    use serde::Serialize;
    use std::sync::Mutex;

    /// Records every request and answers all of them with the same body
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub requests: Mutex<Vec<Request>>,
        pub response: String,
    }

    impl Recorder {
        pub fn responding(response: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: response.to_owned(),
            }
        }

        pub fn last(&self) -> Request {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Requester for Recorder {
        async fn send(&self, request: Request) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    #[derive(Serialize)]
    struct Filters {
        state: Option<&'static str>,
        labels: Vec<&'static str>,
        per_page: u8,
        draft: bool,
        milestone: Option<u64>,
    }

    #[test]
    fn query_parameters() {
        let filters = Filters {
            state: Some("open"),
            labels: vec!["bug", "ui"],
            per_page: 50,
            draft: false,
            milestone: None,
        };
        let request = Request::new(Method::Get, "repos/octocat/Hello-World/issues")
            .query(&filters)
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("draft".to_owned(), "false".to_owned()),
                ("labels".to_owned(), "bug,ui".to_owned()),
                ("per_page".to_owned(), "50".to_owned()),
                ("state".to_owned(), "open".to_owned()),
            ]
        );

        let url = request.url(super::DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues?draft=false&labels=bug%2Cui&per_page=50&state=open"
        );
    }

    #[test]
    fn absent_query() {
        let none: Option<&Pagination> = None;
        let request = Request::new(Method::Get, "user/followers").query(&none).unwrap();
        assert!(request.query.is_empty());
        assert_eq!(
            request.url("https://ghe.example.com/api/v3/").unwrap().as_str(),
            "https://ghe.example.com/api/v3/user/followers"
        );
    }

    #[test]
    fn nested_query_is_rejected() {
        let nested = serde_json::json!({ "outer": { "inner": 1 } });
        assert!(Request::new(Method::Get, "").query(&nested).is_err());
        assert!(Request::new(Method::Get, "").query(&"text").is_err());
    }

    #[test]
    fn decode_error_shows_payload() {
        let error = decode::<Vec<u64>>(r#"{"message":"Not Found"}"#).unwrap_err();
        match error {
            Error::Deserialize { content, .. } => {
                assert!(content.contains("\"message\": \"Not Found\""));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn disconnected() {
        let result = Disconnected.misc().zen().await;
        assert!(matches!(result, Err(Error::Disconnected)));
    }
}
