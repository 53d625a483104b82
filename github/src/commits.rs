use super::{
    client::{CommitCommentBody, Requester, RequesterExt, Result},
    owner_and_repo, Association, CommitCommentReactionCreated, DateTime, GitUser, Reaction,
    ReactionRollup, SimpleUser,
};
use serde::{Deserialize, Serialize};

/// A commit as returned by the commits API
///
/// GitHub API docs: https://docs.github.com/en/rest/commits/commits
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub sha: String,
    pub node_id: String,
    pub commit: CommitObject,
    pub url: String,
    pub html_url: String,
    pub comments_url: String,
    pub author: Option<SimpleUser>,
    pub committer: Option<SimpleUser>,
    pub parents: Vec<Parent>,
}

impl Commit {
    /// Leave a comment on this commit, optionally anchored to a line of a file
    pub async fn add_comment<R>(
        &self,
        requester: &R,
        body: impl Into<String>,
        path: Option<String>,
        position: Option<u64>,
    ) -> Result<CommitComment>
    where
        R: Requester + ?Sized,
    {
        comment_on_commit(requester, &self.html_url, &self.sha, body.into(), path, position).await
    }
}

/// The git data of a commit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitObject {
    pub author: Option<GitUser>,
    pub committer: Option<GitUser>,
    pub message: String,
    pub tree: Tree,
    pub url: String,
    pub comment_count: u64,
    pub verification: Option<Verification>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub sha: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    pub signature: Option<String>,
    pub payload: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    pub sha: String,
    pub url: String,
    pub html_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitComment {
    pub url: String,
    pub html_url: String,
    pub id: u64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    pub position: Option<u64>,
    pub line: Option<u64>,
    pub path: Option<String>,
    pub commit_id: String,
    pub body: String,
    pub author_association: Association,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub reactions: Option<ReactionRollup>,
}

impl CommitComment {
    /// React to this comment
    pub async fn add_reaction<R>(
        &self,
        requester: &R,
        reaction: Reaction,
    ) -> Result<CommitCommentReactionCreated>
    where
        R: Requester + ?Sized,
    {
        let (owner, repo) = owner_and_repo(&self.html_url)?;

        requester
            .reactions()
            .create_for_commit_comment(&owner, &repo, self.id, reaction)
            .await
    }
}

/// Comment on the commit `sha` of the repository that `url` points into
pub(crate) async fn comment_on_commit<R>(
    requester: &R,
    url: &str,
    sha: &str,
    body: String,
    path: Option<String>,
    position: Option<u64>,
) -> Result<CommitComment>
where
    R: Requester + ?Sized,
{
    let (owner, repo) = owner_and_repo(url)?;
    let comment = CommitCommentBody {
        body,
        path,
        position,
        line: None,
    };

    requester
        .commits()
        .comment(&owner, &repo, sha, &comment)
        .await
}

#[cfg(test)]
mod test {
    use super::{Commit, CommitComment};
    use crate::{client::test::Recorder, Reaction};

    #[test]
    fn commit() {
        const JSON: &str = include_str!("../test-input/commit.json");
        let commit: Commit = serde_json::from_str(JSON).unwrap();

        assert_eq!(commit.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
        assert_eq!(commit.commit.message, "Fix all the bugs");
        assert_eq!(commit.commit.comment_count, 0);
        assert_eq!(
            commit.commit.author.as_ref().map(|a| a.name.as_str()),
            Some("Monalisa Octocat")
        );
        assert_eq!(commit.parents.len(), 1);
        assert!(commit.commit.verification.map_or(false, |v| !v.verified));
    }

    #[tokio::test]
    async fn add_comment() {
        let commit: Commit =
            serde_json::from_str(include_str!("../test-input/commit.json")).unwrap();
        let requester = Recorder::responding(r#"{ "id": 7, "body": "Nice fix" }"#);

        let comment = commit
            .add_comment(&requester, "Nice fix", Some("README".to_owned()), Some(2))
            .await
            .unwrap();
        assert_eq!(comment.id, 7);

        let request = requester.last();
        assert_eq!(
            request.path,
            "repos/octocat/Hello-World/commits/6dcb09b5b57875f334f61aebed695e2e4193db5e/comments"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"body":"Nice fix","path":"README","position":2}"#)
        );
    }

    #[tokio::test]
    async fn add_reaction() {
        let comment = CommitComment {
            id: 33548674,
            html_url: "https://github.com/octocat/Hello-World/commit/6113728f#commitcomment-33548674"
                .to_owned(),
            ..Default::default()
        };
        let requester = Recorder::responding(
            r#"{
                "id": 1,
                "node_id": "MDg6UmVhY3Rpb24x",
                "user": { "login": "octocat", "id": 1 },
                "content": "+1",
                "created_at": "2016-05-20T20:09:31Z"
            }"#,
        );

        let created = comment
            .add_reaction(&requester, Reaction::ThumbsUp)
            .await
            .unwrap();
        assert_eq!(created.reaction, Reaction::ThumbsUp);
        assert_eq!(created.user.login, "octocat");

        let request = requester.last();
        assert_eq!(
            request.path,
            "repos/octocat/Hello-World/comments/33548674/reactions"
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"content":"+1"}"#));
    }
}
