//! Error type for Github Client

use serde::Deserialize;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("url error")]
    Url(#[from] url::ParseError),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("not authorized: {0}")]
    NotAuthorized(String),

    #[error("`{0}` `{1}`")]
    GithubClientError(u16, GithubClientError),

    #[error("no transport is configured for this client")]
    Disconnected,

    #[error("Error deserializing: {source}\nContent: {content}")]
    Deserialize {
        source: serde_json::Error,
        content: String,
    },
}

impl Error {
    /// Turn a failed response into an error, for use by `Requester` implementations
    pub fn from_response(status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<GithubClientError>(body).unwrap_or_else(|_| {
            GithubClientError {
                message: Some(body.to_owned()),
                errors: None,
                documentation_url: None,
            }
        });

        if status == 401 {
            Error::NotAuthorized(error.message.unwrap_or_default())
        } else {
            Error::GithubClientError(status, error)
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://docs.github.com/en/rest/overview/resources-in-the-rest-api#client-errors
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

impl fmt::Display for GithubClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message.as_deref().unwrap_or("request failed"))?;
        if let Some(url) = &self.documentation_url {
            write!(f, " ({})", url)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

#[cfg(test)]
mod test {
    use super::{Error, GithubClientErrorType};

    #[test]
    fn validation_failure() {
        const BODY: &str = r#"
            {
                "message": "Validation Failed",
                "errors": [
                    { "resource": "Issue", "field": "title", "code": "missing_field" }
                ],
                "documentation_url": "https://docs.github.com/rest/reference/issues#create-an-issue"
            }
        "#;

        match Error::from_response(422, BODY) {
            Error::GithubClientError(status, error) => {
                assert_eq!(status, 422);
                assert_eq!(error.message.as_deref(), Some("Validation Failed"));
                assert_eq!(
                    error.errors.unwrap()[0],
                    GithubClientErrorType::Code {
                        resource: "Issue".to_owned(),
                        field: "title".to_owned(),
                        code: "missing_field".to_owned(),
                    }
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn unauthorized() {
        let error = Error::from_response(401, r#"{ "message": "Bad credentials" }"#);
        assert!(matches!(error, Error::NotAuthorized(message) if message == "Bad credentials"));
    }

    #[test]
    fn non_json_body() {
        match Error::from_response(502, "Bad Gateway") {
            Error::GithubClientError(502, error) => {
                assert_eq!(error.to_string(), "Bad Gateway");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
