use crate::{
    client::{Requester, RequesterExt, Result},
    commits::comment_on_commit,
    CommitComment, DateTime, GitUser, RepoEventInfo,
};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitCommentEvent {
    pub action: CommitCommentAction,
    pub comment: CommitComment,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

impl CommitCommentEvent {
    /// Fetch the commit that was commented on
    pub async fn get_commit<R>(&self, requester: &R) -> Result<crate::Commit>
    where
        R: Requester + ?Sized,
    {
        let repository = &self.event_info.repository;

        requester
            .commits()
            .get(
                repository.owner_login(),
                &repository.name,
                &self.comment.commit_id,
                None,
            )
            .await
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommitCommentAction {
    Created,
}

impl Default for CommitCommentAction {
    fn default() -> Self {
        CommitCommentAction::Created
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub forced: bool,
    pub base_ref: Option<String>,
    pub compare: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    pub head_commit: Option<HeadCommit>,
    pub pusher: Pusher,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

impl PushEvent {
    /// The branch name when a branch was pushed
    pub fn branch(&self) -> Option<&str> {
        self.git_ref.strip_prefix("refs/heads/")
    }

    /// Comment on the commit at the tip of the push
    ///
    /// Branch deletions carry no head commit and are rejected.
    pub async fn add_comment_to_commit<R>(
        &self,
        requester: &R,
        body: impl Into<String>,
        path: Option<String>,
        position: Option<u64>,
    ) -> Result<CommitComment>
    where
        R: Requester + ?Sized,
    {
        let head_commit = self
            .head_commit
            .as_ref()
            .ok_or("push event has no head commit")?;

        comment_on_commit(
            requester,
            &head_commit.url,
            &head_commit.id,
            body.into(),
            path,
            position,
        )
        .await
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pusher {
    pub name: String,
    pub email: Option<String>,
}

/// A commit listed in a push payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub id: String,
    pub tree_id: String,
    pub distinct: bool,
    pub message: String,
    pub timestamp: DateTime,
    pub url: String,
    pub author: GitUser,
    pub committer: GitUser,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

/// The commit at the tip of a push or workflow run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadCommit {
    pub id: String,
    pub tree_id: String,
    pub distinct: bool,
    pub message: String,
    pub timestamp: DateTime,
    pub url: String,
    pub author: GitUser,
    pub committer: GitUser,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: u64,
    pub sha: String,
    pub name: String,
    pub target_url: Option<String>,
    pub context: String,
    pub description: Option<String>,
    pub state: StatusState,
    pub commit: crate::Commit,
    #[serde(default)]
    pub branches: Vec<Branch>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(flatten)]
    pub event_info: RepoEventInfo,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatusState {
    Pending,
    Success,
    Failure,
    Error,
}

/// A branch containing the commit a status was reported for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
    #[serde(default)]
    pub protected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchCommit {
    pub sha: String,
    pub url: String,
}

repo_origin!(CommitCommentEvent, PushEvent, StatusEvent);

#[cfg(test)]
mod test {
    use super::{CommitCommentAction, CommitCommentEvent, PushEvent, StatusEvent, StatusState};
    use crate::client::test::Recorder;

    #[test]
    fn push_event() {
        const JSON: &str = include_str!("../../test-input/push-event.json");
        let push: PushEvent = serde_json::from_str(JSON).unwrap();

        assert_eq!(push.branch(), Some("simple-tag"));
        assert_eq!(push.commits.len(), 1);
        assert_eq!(push.pusher.name, "Codertocat");
        assert_eq!(push.event_info.sender.login, "Codertocat");
        assert_eq!(push.event_info.repository.created_at.timestamp(), 1557933565);
        assert!(push.head_commit.is_some());
    }

    #[tokio::test]
    async fn comment_on_head_commit() {
        const JSON: &str = include_str!("../../test-input/push-event.json");
        let push: PushEvent = serde_json::from_str(JSON).unwrap();
        let requester = Recorder::responding(
            r#"{ "id": 1, "body": "Looks good", "commit_id": "6113728f27ae82c7b1a177c8d03f9e96e0adf246" }"#,
        );

        let comment = push
            .add_comment_to_commit(&requester, "Looks good", None, None)
            .await
            .unwrap();
        assert_eq!(comment.body, "Looks good");

        assert_eq!(
            requester.last().path,
            "repos/Codertocat/Hello-World/commits/6113728f27ae82c7b1a177c8d03f9e96e0adf246/comments"
        );
    }

    #[tokio::test]
    async fn push_without_head_commit_is_an_error() {
        let push = PushEvent::default();
        let requester = Recorder::default();

        let result = push
            .add_comment_to_commit(&requester, "unreachable", None, None)
            .await;
        assert!(result.is_err());
        assert!(requester.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn commit_comment_fetches_commit() {
        let mut event = CommitCommentEvent::default();
        event.event_info.repository.name = "Hello-World".to_owned();
        event.event_info.repository.owner.login = "Codertocat".to_owned();
        event.comment.commit_id = "6dcb09b5b57875f334f61aebed695e2e4193db5e".to_owned();
        assert_eq!(event.action, CommitCommentAction::Created);

        let requester = Recorder::responding(include_str!("../../test-input/commit.json"));

        let commit = event.get_commit(&requester).await.unwrap();
        assert_eq!(commit.commit.message, "Fix all the bugs");
        assert_eq!(
            requester.last().path,
            "repos/Codertocat/Hello-World/commits/6dcb09b5b57875f334f61aebed695e2e4193db5e"
        );
    }

    #[test]
    fn status_event() {
        const JSON: &str = include_str!("../../test-input/status-event.json");
        let status: StatusEvent = serde_json::from_str(JSON).unwrap();

        assert_eq!(status.state, StatusState::Success);
        assert_eq!(status.branches[0].name, "master");
        assert_eq!(status.commit.sha, status.sha);
    }
}
