use crate::config::ConfigError;
use std::borrow::Cow;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("github error")]
    Github(#[from] github::client::Error),
    #[error("config error")]
    Config(#[from] ConfigError),
    #[error("environment variable `{name}` is unusable")]
    EnvVar {
        name: String,
        source: std::env::VarError,
    },
    #[error("no event handler was configured, call build_no_handler instead")]
    NoHandler,
    #[error("`{0}`")]
    Message(Cow<'static, str>),
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
