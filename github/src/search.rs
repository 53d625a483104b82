use super::{Issue, Repository};
use serde::{Deserialize, Serialize};

/// Sort qualifiers accepted by the search API, descending unless the name says otherwise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sort {
    InteractionsDesc,
    InteractionsAsc,
    ReactionsDesc,
    ReactionsAsc,
    #[serde(rename = "reactions-+1")]
    #[strum(serialize = "reactions-+1")]
    ReactionsThumbsUp,
    #[serde(rename = "reactions--1")]
    #[strum(serialize = "reactions--1")]
    ReactionsThumbsDown,
    ReactionsSmile,
    ReactionsTada,
    ReactionsHeart,
    AuthorDateDesc,
    AuthorDateAsc,
    CommitterDateDesc,
    CommitterDateAsc,
    UpdatedDesc,
    UpdatedAsc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepoSearchResultItem {
    pub score: f64,
    #[serde(flatten)]
    pub repository: Repository,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueSearchResultItem {
    pub score: f64,
    #[serde(flatten)]
    pub issue: Issue,
}
