//! Work an event handler asks the client to carry out.
//!
//! A [`Command`] is a list of futures. The client awaits each one and hands its output to
//! [`EventHandler::message`](crate::EventHandler::message).

use futures::future::{self, Future, FutureExt};
use std::{fmt::Debug, sync::Arc};

pub type BoxFuture<T> = future::BoxFuture<'static, T>;

pub struct Command<T> {
    to_be_performed: Vec<BoxFuture<T>>,
}

impl<T> Command<T>
where
    T: Debug + Send,
{
    pub fn none() -> Self {
        Self {
            to_be_performed: Vec::new(),
        }
    }

    /// Run `future`, turning its output into a message with `f`
    pub fn perform<A>(
        future: impl Future<Output = A> + Send + 'static,
        f: impl FnOnce(A) -> T + Send + 'static,
    ) -> Self {
        Self {
            to_be_performed: vec![future.map(f).boxed()],
        }
    }

    pub fn perform_multiple<F>(futures: impl IntoIterator<Item = F>) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            to_be_performed: futures.into_iter().map(FutureExt::boxed).collect(),
        }
    }

    /// Merge several commands into one, keeping their order
    pub fn batch(commands: impl IntoIterator<Item = Command<T>>) -> Self {
        Self {
            to_be_performed: commands
                .into_iter()
                .flat_map(|command| command.to_be_performed)
                .collect(),
        }
    }

    pub fn map<A>(self, f: impl Fn(T) -> A + Send + Sync + 'static) -> Command<A>
    where
        T: 'static,
        A: Debug + Send,
    {
        let f = Arc::new(f);

        Command {
            to_be_performed: self
                .to_be_performed
                .into_iter()
                .map(|future| {
                    let f = f.clone();
                    future.map(move |result| f(result)).boxed()
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_be_performed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_be_performed.len()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<T>> {
        self.to_be_performed
    }
}

impl<T, A> From<A> for Command<T>
where
    A: Future<Output = T> + Send + 'static,
    T: Debug + Send,
{
    fn from(future: A) -> Self {
        Self {
            to_be_performed: vec![future.boxed()],
        }
    }
}

impl<T> Default for Command<T>
where
    T: Debug + Send,
{
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod test {
    use super::Command;
    use futures::future;

    #[derive(Debug, PartialEq)]
    enum Message {
        Number(u32),
        Text(String),
    }

    async fn run(command: Command<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        for future in command.into_futures() {
            messages.push(future.await);
        }
        messages
    }

    #[tokio::test]
    async fn perform_and_batch() {
        let first = Command::perform(future::ready(1), Message::Number);
        let second = Command::perform(async { "two".to_owned() }, Message::Text);
        let command = Command::batch(vec![first, Command::none(), second]);
        assert_eq!(command.len(), 2);

        assert_eq!(
            run(command).await,
            vec![Message::Number(1), Message::Text("two".to_owned())]
        );
    }

    #[tokio::test]
    async fn map_and_from() {
        let command: Command<u32> = Command::perform_multiple(vec![future::ready(3), future::ready(4)]);
        let command = command.map(|n| Message::Number(n * 10));

        assert_eq!(
            run(command).await,
            vec![Message::Number(30), Message::Number(40)]
        );

        let command: Command<Message> = future::ready(Message::Number(5)).into();
        assert!(!command.is_empty());
        assert!(Command::<Message>::none().is_empty());
    }
}
