use crate::{
    command::Command,
    config::Authorization,
    handler::{DefaultEventHandler, EventHandler},
};
use async_trait::async_trait;
use github::client::{Disconnected, Request, Requester, Result, USER_AGENT};
use log::debug;
use std::{fmt, sync::Arc};

/// A [`Requester`] that also knows the bot it works for
pub trait GitHubClient: Requester {
    type EventHandler: EventHandler;

    fn event_handler(&self) -> &Self::EventHandler;

    fn user_agent(&self) -> &str;

    fn authorization(&self) -> &Authorization;
}

/// A bot: an event handler together with the transport used to call the API
pub struct Client<H> {
    handler: H,
    requester: Arc<dyn Requester>,
    user_agent: String,
    authorization: Authorization,
}

impl<H: EventHandler> Client<H> {
    pub fn new(
        handler: H,
        requester: Arc<dyn Requester>,
        user_agent: String,
        authorization: Authorization,
    ) -> Self {
        Self {
            handler,
            requester,
            user_agent,
            authorization,
        }
    }

    pub fn set_auth(self, authorization: Authorization) -> Self {
        Self {
            authorization,
            ..self
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Await the futures of `command` in order, handing each output to the handler
    pub async fn perform(&self, command: Command<H::Message>) {
        for future in command.into_futures() {
            let message = future.await;
            debug!("handler message: {:?}", message);
            self.handler.message(message).await;
        }
    }
}

#[async_trait]
impl<H: Send + Sync> Requester for Client<H> {
    async fn send(&self, mut request: Request) -> Result<String> {
        request.user_agent = self.user_agent.clone();
        self.requester.send(request).await
    }
}

impl<H: EventHandler> GitHubClient for Client<H> {
    type EventHandler = H;

    fn event_handler(&self) -> &H {
        &self.handler
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn authorization(&self) -> &Authorization {
        &self.authorization
    }
}

impl<H: fmt::Debug> fmt::Debug for Client<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("handler", &self.handler)
            .field("user_agent", &self.user_agent)
            .field("authorization", &self.authorization)
            .finish()
    }
}

impl Default for Client<DefaultEventHandler> {
    fn default() -> Self {
        Client::new(
            DefaultEventHandler,
            Arc::new(Disconnected),
            USER_AGENT.to_owned(),
            Authorization::default(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Client, GitHubClient};
    use crate::{command::Command, handler::EventHandler, Authorization};
    use async_trait::async_trait;
    use github::{
        client::{Error, Request, Requester, RequesterExt},
        events::PushEvent,
        CommitComment,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<Request>>,
    }

    #[async_trait]
    impl Requester for Recorder {
        async fn send(&self, request: Request) -> Result<String, Error> {
            self.requests.lock().unwrap().push(request);
            Ok(r#"{ "id": 1, "body": "Thanks for pushing!" }"#.to_owned())
        }
    }

    #[derive(Debug)]
    enum Message {
        CommentPosted(Result<CommitComment, Error>),
    }

    #[derive(Debug, Default)]
    struct Greeter {
        posted: Mutex<Vec<u64>>,
    }

    #[async_trait]
    impl EventHandler for Greeter {
        type Message = Message;
        type GitHubClient = Client<Self>;

        async fn message(&self, message: Message) {
            let Message::CommentPosted(comment) = message;
            if let Ok(comment) = comment {
                self.posted.lock().unwrap().push(comment.id);
            }
        }

        async fn push_event(
            &self,
            github_client: Arc<Self::GitHubClient>,
            push: PushEvent,
        ) -> Command<Message> {
            Command::perform(
                async move {
                    push.add_comment_to_commit(&*github_client, "Thanks for pushing!", None, None)
                        .await
                },
                Message::CommentPosted,
            )
        }
    }

    #[tokio::test]
    async fn hooks_drive_the_requester() {
        let recorder = Arc::new(Recorder::default());
        let client = Arc::new(Client::new(
            Greeter::default(),
            recorder.clone(),
            "greeter/0.1".to_owned(),
            Authorization::default(),
        ));

        let push: PushEvent =
            serde_json::from_str(include_str!("../github/test-input/push-event.json")).unwrap();
        let command = client.handler().push_event(client.clone(), push).await;
        client.perform(command).await;

        assert_eq!(*client.event_handler().posted.lock().unwrap(), vec![1]);

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].user_agent, "greeter/0.1");
        assert_eq!(
            requests[0].path,
            "repos/Codertocat/Hello-World/commits/6113728f27ae82c7b1a177c8d03f9e96e0adf246/comments"
        );
    }

    #[tokio::test]
    async fn default_client_is_disconnected() {
        let client = Client::default();

        assert_eq!(client.authorization(), &Authorization::None);
        assert!(client
            .handler()
            .push_event(Arc::new(Client::default()), PushEvent::default())
            .await
            .is_empty());
        assert!(matches!(
            client.misc().zen().await,
            Err(Error::Disconnected)
        ));
    }
}
