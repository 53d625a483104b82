use serde::Deserialize;
use std::{fmt, fs, io, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("toml parsing error")]
    De(#[from] toml::de::Error),
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
}

/// Credentials file for a bot, e.g.
///
/// ```toml
/// username = "octocat"
/// access_token = "ghp_..."
/// user_agent = "my-bot/1.0"
/// ```
#[derive(Clone, Deserialize)]
pub struct Config {
    pub username: String,
    pub access_token: String,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn to_personal_auth(&self) -> Authorization {
        Authorization::PersonalToken {
            username: self.username.clone(),
            token: self.access_token.clone(),
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        if config.username.is_empty() {
            return Err(ConfigError::Empty("username"));
        }
        if config.access_token.is_empty() {
            return Err(ConfigError::Empty("access_token"));
        }
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("access_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Credentials a client was configured with.
///
/// These are kept with the client for `Requester` implementations to use. Nothing in this crate
/// attaches them to requests.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    None,
    PersonalToken { username: String, token: String },
}

impl Authorization {
    pub fn username(&self) -> Option<&str> {
        match self {
            Authorization::None => None,
            Authorization::PersonalToken { username, .. } => Some(username),
        }
    }
}

impl Default for Authorization {
    fn default() -> Self {
        Authorization::None
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::None => f.write_str("None"),
            Authorization::PersonalToken { username, .. } => f
                .debug_struct("PersonalToken")
                .field("username", username)
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
