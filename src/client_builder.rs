use crate::{
    client::Client,
    config::{Authorization, Config},
    error::{Error, Result},
    handler::{DefaultEventHandler, EventHandler},
};
use github::client::{Disconnected, Requester, USER_AGENT};
use log::{debug, info};
use std::{env, path::Path, sync::Arc};

pub struct ClientBuilder<H> {
    handler: Option<H>,
    requester: Option<Arc<dyn Requester>>,
    user_agent: Option<String>,
    authorization: Option<Authorization>,
}

impl<H: EventHandler> ClientBuilder<H> {
    pub fn new() -> Self {
        Self {
            handler: None,
            requester: None,
            user_agent: None,
            authorization: None,
        }
    }

    pub fn event_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Transport used for API calls. Without one the client is [`Disconnected`].
    pub fn requester(mut self, requester: impl Requester + 'static) -> Self {
        self.requester = Some(Arc::new(requester));
        self
    }

    pub fn personal_auth<U, T>(mut self, username: U, token: T) -> Self
    where
        U: Into<String>,
        T: Into<String>,
    {
        self.authorization = Some(Authorization::PersonalToken {
            username: username.into(),
            token: token.into(),
        });
        self
    }

    /// Take credentials from `config`. Its user agent applies unless one was already set.
    pub fn config(mut self, config: Config) -> Self {
        self.authorization = Some(config.to_personal_auth());
        if self.user_agent.is_none() {
            self.user_agent = config.user_agent;
        }
        self
    }

    pub fn credentials_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::from_file(path)?;
        info!("using credentials of {} from {}", config.username, path.display());
        Ok(self.config(config))
    }

    /// Read the username and token from the environment variables `user_var` and `token_var`
    pub fn credentials_env_var(self, user_var: &str, token_var: &str) -> Result<Self> {
        let read = |name: &str| {
            env::var(name).map_err(|source| Error::EnvVar {
                name: name.to_owned(),
                source,
            })
        };

        let username = read(user_var)?;
        let token = read(token_var)?;
        debug!("using credentials of {} from ${}", username, user_var);
        Ok(self.personal_auth(username, token))
    }

    pub fn build(self) -> Result<Client<H>> {
        let handler = self.handler.ok_or(Error::NoHandler)?;
        Ok(Client::new(
            handler,
            self.requester.unwrap_or_else(|| Arc::new(Disconnected)),
            self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned()),
            self.authorization.unwrap_or_default(),
        ))
    }
}

impl ClientBuilder<DefaultEventHandler> {
    /// A client with no handler, no transport and no credentials
    pub fn build_unconfigured() -> Client<DefaultEventHandler> {
        Client::default()
    }

    /// Build with [`DefaultEventHandler`], ignoring any handler set earlier
    pub fn build_no_handler(self) -> Client<DefaultEventHandler> {
        Client::new(
            DefaultEventHandler,
            self.requester.unwrap_or_else(|| Arc::new(Disconnected)),
            self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned()),
            self.authorization.unwrap_or_default(),
        )
    }
}

impl<H: EventHandler> Default for ClientBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::ClientBuilder;
    use crate::{client::GitHubClient, Authorization, DefaultEventHandler, Error};
    use github::client::USER_AGENT;
    use std::{env, fs};

    #[test]
    fn build_requires_a_handler() {
        assert!(matches!(
            ClientBuilder::<DefaultEventHandler>::new().build(),
            Err(Error::NoHandler)
        ));

        let client = ClientBuilder::new()
            .event_handler(DefaultEventHandler)
            .user_agent("octobot-test")
            .personal_auth("octocat", "ghp_secret")
            .build()
            .unwrap();
        assert_eq!(client.user_agent(), "octobot-test");
        assert_eq!(client.authorization().username(), Some("octocat"));
    }

    #[test]
    fn unconfigured() {
        let client = ClientBuilder::<DefaultEventHandler>::build_unconfigured();
        assert_eq!(client.user_agent(), USER_AGENT);
        assert_eq!(client.authorization(), &Authorization::None);

        let client = ClientBuilder::<DefaultEventHandler>::new()
            .user_agent("bare")
            .build_no_handler();
        assert_eq!(client.user_agent(), "bare");
    }

    #[test]
    fn credentials_file() {
        let path = env::temp_dir().join(format!("octobot-credentials-{}.toml", std::process::id()));
        fs::write(
            &path,
            "username = \"octocat\"\naccess_token = \"ghp_file\"\nuser_agent = \"from-file\"\n",
        )
        .unwrap();

        let client = ClientBuilder::<DefaultEventHandler>::new()
            .credentials_file(&path)
            .unwrap()
            .build_no_handler();
        fs::remove_file(&path).unwrap();

        assert_eq!(client.user_agent(), "from-file");
        assert_eq!(
            client.authorization(),
            &Authorization::PersonalToken {
                username: "octocat".to_owned(),
                token: "ghp_file".to_owned(),
            }
        );

        assert!(matches!(
            ClientBuilder::<DefaultEventHandler>::new().credentials_file(path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn credentials_env_var() {
        env::set_var("OCTOBOT_TEST_USER", "hubot");
        env::set_var("OCTOBOT_TEST_TOKEN", "ghp_env");

        let client = ClientBuilder::<DefaultEventHandler>::new()
            .credentials_env_var("OCTOBOT_TEST_USER", "OCTOBOT_TEST_TOKEN")
            .unwrap()
            .build_no_handler();
        assert_eq!(client.authorization().username(), Some("hubot"));

        match ClientBuilder::<DefaultEventHandler>::new()
            .credentials_env_var("OCTOBOT_TEST_USER", "OCTOBOT_TEST_MISSING")
        {
            Err(Error::EnvVar { name, .. }) => assert_eq!(name, "OCTOBOT_TEST_MISSING"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
