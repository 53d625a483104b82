use super::{require, Builder};
use crate::{
    client::{
        commits::comment_request, reactions::create_for_commit_comment_request,
        CommitCommentBody, Request, Result,
    },
    CommitComment, CommitCommentReactionCreated, Reaction,
};

/// Create a comment on a commit, optionally anchored to a line of one of its files
///
/// GitHub API docs: https://docs.github.com/en/rest/commits/comments#create-a-commit-comment
#[derive(Clone, Debug, Default)]
pub struct CommitCommentBuilder {
    owner: String,
    repo: String,
    sha: String,
    comment: CommitCommentBody,
}

impl CommitCommentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn repo<T: Into<String>>(mut self, repo: T) -> Self {
        self.repo = repo.into();
        self
    }

    pub fn sha<T: Into<String>>(mut self, sha: T) -> Self {
        self.sha = sha.into();
        self
    }

    pub fn body<T: Into<String>>(mut self, body: T) -> Self {
        self.comment.body = body.into();
        self
    }

    pub fn path<T: Into<String>>(mut self, path: T) -> Self {
        self.comment.path = Some(path.into());
        self
    }

    pub fn position(mut self, position: u64) -> Self {
        self.comment.position = Some(position);
        self
    }

    pub fn line(mut self, line: u64) -> Self {
        self.comment.line = Some(line);
        self
    }
}

impl Builder for CommitCommentBuilder {
    type Response = CommitComment;

    fn request(&self) -> Result<Request> {
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        require(&self.sha, "sha")?;
        comment_request(&self.owner, &self.repo, &self.sha, &self.comment)
    }
}

/// React to a commit comment
///
/// GitHub API docs: https://docs.github.com/en/rest/reactions#create-reaction-for-a-commit-comment
#[derive(Clone, Debug, Default)]
pub struct CommentReactionBuilder {
    owner: String,
    repo: String,
    comment_id: u64,
    reaction: Reaction,
}

impl CommentReactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn repo<T: Into<String>>(mut self, repo: T) -> Self {
        self.repo = repo.into();
        self
    }

    pub fn comment_id(mut self, comment_id: u64) -> Self {
        self.comment_id = comment_id;
        self
    }

    pub fn reaction(mut self, reaction: Reaction) -> Self {
        self.reaction = reaction;
        self
    }
}

impl Builder for CommentReactionBuilder {
    type Response = CommitCommentReactionCreated;

    fn request(&self) -> Result<Request> {
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        create_for_commit_comment_request(&self.owner, &self.repo, self.comment_id, self.reaction)
    }
}

#[cfg(test)]
mod test {
    use super::{CommentReactionBuilder, CommitCommentBuilder};
    use crate::{
        builders::Builder,
        client::{test::Recorder, Method},
        Reaction,
    };

    #[tokio::test]
    async fn comment_on_commit() {
        let requester = Recorder::responding(r#"{ "id": 3, "body": "Losing my mind", "line": 2 }"#);

        let comment = CommitCommentBuilder::new()
            .owner("octocat")
            .repo("Hello-World")
            .sha("2eb7eeba66a6adf2168391d0cd6dcac995a34489")
            .body("Losing my mind")
            .path("README.md")
            .line(2)
            .execute(&requester)
            .await
            .unwrap();
        assert_eq!(comment.line, Some(2));

        let request = requester.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.path,
            "repos/octocat/Hello-World/commits/2eb7eeba66a6adf2168391d0cd6dcac995a34489/comments"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"body":"Losing my mind","path":"README.md","line":2}"#)
        );
    }

    #[test]
    fn default_reaction() {
        let request = CommentReactionBuilder::new()
            .owner("octocat")
            .repo("Hello-World")
            .comment_id(1)
            .request()
            .unwrap();

        assert_eq!(request.path, "repos/octocat/Hello-World/comments/1/reactions");
        assert_eq!(request.body.as_deref(), Some(r#"{"content":"+1"}"#));

        let request = CommentReactionBuilder::new()
            .owner("octocat")
            .repo("Hello-World")
            .reaction(Reaction::Rocket)
            .request()
            .unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"content":"rocket"}"#));
    }

    #[test]
    fn repository_and_sha_are_required() {
        assert!(CommitCommentBuilder::new().body("hi").request().is_err());
        assert!(CommitCommentBuilder::new()
            .owner("octocat")
            .repo("Hello-World")
            .body("hi")
            .request()
            .is_err());
        assert!(CommentReactionBuilder::new().repo("Hello-World").request().is_err());
    }
}
