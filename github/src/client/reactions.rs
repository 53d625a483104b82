use crate::{
    client::{fetch, Method, Request, Requester, Result},
    CommitCommentReactionCreated, Reaction,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReactionsRequest {
    content: Reaction,
}

/// `ReactionsClient` handles communication with the reactions related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/reactions
pub struct ReactionsClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> ReactionsClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// Create a reaction for a commit comment
    ///
    /// Note that if a reaction of the provided type already exists,
    /// the existing reaction will be returned.
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/reactions#create-reaction-for-a-commit-comment
    pub async fn create_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction: Reaction,
    ) -> Result<CommitCommentReactionCreated> {
        let request = create_for_commit_comment_request(owner, repo, comment_id, reaction)?;
        fetch(self.inner, request).await
    }
}

pub(crate) fn create_for_commit_comment_request(
    owner: &str,
    repo: &str,
    comment_id: u64,
    reaction: Reaction,
) -> Result<Request> {
    let url = format!("repos/{}/{}/comments/{}/reactions", owner, repo, comment_id);
    Request::new(Method::Post, url).json(&ReactionsRequest { content: reaction })
}

#[cfg(test)]
mod test {
    use crate::{
        client::{test::Recorder, RequesterExt},
        Reaction,
    };

    #[tokio::test]
    async fn react_to_commit_comment() {
        let requester = Recorder::responding(
            r#"
            {
                "id": 1,
                "node_id": "MDg6UmVhY3Rpb24x",
                "user": { "login": "octocat", "id": 1 },
                "content": "heart",
                "created_at": "2016-05-20T20:09:31Z"
            }
            "#,
        );

        let created = requester
            .reactions()
            .create_for_commit_comment("octocat", "Hello-World", 33548674, Reaction::Heart)
            .await
            .unwrap();
        assert_eq!(created.reaction, Reaction::Heart);
        assert_eq!(created.user.login, "octocat");

        let request = requester.last();
        assert_eq!(request.path, "repos/octocat/Hello-World/comments/33548674/reactions");
        assert_eq!(request.body.as_deref(), Some(r#"{"content":"heart"}"#));
    }
}
