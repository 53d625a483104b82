use super::{DateTime, ReactionRollup, SimpleUser};
use serde::{Deserialize, Serialize};

/// GitHub API docs: https://docs.github.com/en/rest/releases/releases#get-a-release
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub url: String,
    pub html_url: String,
    pub assets_url: String,
    pub upload_url: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
    pub id: u64,
    pub node_id: String,
    pub tag_name: String,
    pub target_commitish: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub created_at: DateTime,
    pub published_at: Option<DateTime>,
    pub author: SimpleUser,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
    pub reactions: Option<ReactionRollup>,
}

impl Release {
    /// The release name, falling back to its tag when it was left unnamed
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.tag_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub url: String,
    pub browser_download_url: String,
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub label: Option<String>,
    pub state: ReleaseAssetState,
    pub content_type: String,
    pub size: u64,
    pub download_count: u64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub uploader: Option<SimpleUser>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseAssetState {
    Uploaded,
    Open,
}
