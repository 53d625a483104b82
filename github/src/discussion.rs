use super::{Association, DateTime, ReactionRollup, SimpleUser};
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: u64,
    pub node_id: String,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
    pub repository_url: String,
    pub category: Option<DiscussionCategory>,
    pub user: Option<SimpleUser>,
    pub state: String,
    pub locked: bool,
    pub active_lock_reason: Option<LockReason>,
    pub comments: u64,
    pub answer_html_url: Option<String>,
    pub answer_chosen_at: Option<DateTime>,
    pub answer_chosen_by: Option<SimpleUser>,
    #[serde(default)]
    pub author_association: Association,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub reactions: Option<ReactionRollup>,
}

impl Discussion {
    pub fn is_answered(&self) -> bool {
        self.answer_chosen_at.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionCategory {
    pub id: u64,
    pub node_id: Option<String>,
    pub repository_id: u64,
    pub emoji: String,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub is_answerable: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionComment {
    pub id: u64,
    pub node_id: String,
    pub html_url: String,
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub child_comment_count: u64,
    pub repository_url: String,
    pub discussion_id: u64,
    #[serde(default)]
    pub author_association: Association,
    pub user: Option<SimpleUser>,
    pub body: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub reactions: Option<ReactionRollup>,
}

/// Why a conversation was locked, spelled the way GitHub sends it
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
pub enum LockReason {
    #[serde(rename = "off-topic")]
    #[strum(serialize = "off-topic")]
    OffTopic,
    #[serde(rename = "too heated")]
    #[strum(serialize = "too heated")]
    TooHeated,
    #[serde(rename = "resolved")]
    #[strum(serialize = "resolved")]
    Resolved,
    #[serde(rename = "spam")]
    #[strum(serialize = "spam")]
    Spam,
}

#[cfg(test)]
mod test {
    use super::LockReason;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn lock_reason_spellings() {
        assert_eq!(
            LockReason::VARIANTS,
            &["off-topic", "too heated", "resolved", "spam"]
        );
        assert_eq!(LockReason::from_str("too heated").unwrap(), LockReason::TooHeated);
        assert!(LockReason::from_str("too_heated").is_err());
        assert_eq!(
            serde_json::from_str::<LockReason>(r#""off-topic""#).unwrap(),
            LockReason::OffTopic
        );
    }
}
