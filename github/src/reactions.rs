use super::{DateTime, SimpleUser};
use serde::{Deserialize, Serialize};

// GitHub API docs: https://docs.github.com/en/rest/reactions

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    #[serde(rename = "+1")]
    ThumbsUp,
    #[serde(rename = "-1")]
    ThumbsDown,
    Laugh,
    Confused,
    Heart,
    Hooray,
    Rocket,
    Eyes,
}

impl Default for Reaction {
    fn default() -> Self {
        Reaction::ThumbsUp
    }
}

/// Reaction counts attached to issues, comments and releases
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionRollup {
    pub url: String,
    pub total_count: u64,
    #[serde(rename = "+1")]
    pub thumbs_up: u64,
    #[serde(rename = "-1")]
    pub thumbs_down: u64,
    pub laugh: u64,
    pub confused: u64,
    pub heart: u64,
    pub hooray: u64,
    pub rocket: u64,
    pub eyes: u64,
}

/// Response to creating a reaction on a commit comment
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitCommentReactionCreated {
    pub id: u64,
    pub node_id: String,
    pub user: SimpleUser,
    #[serde(rename = "content")]
    pub reaction: Reaction,
    pub created_at: DateTime,
}
