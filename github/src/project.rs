use super::{DateTime, SimpleUser};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Open,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub columns_url: String,
    pub owner_url: String,
    pub name: String,
    pub body: Option<String>,
    pub number: u64,
    pub state: ProjectState,
    pub creator: Option<SimpleUser>,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub column_url: String,
    pub content_url: Option<String>,
    pub project_url: String,
    pub note: Option<String>,
    pub creator: SimpleUser,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub archived: bool,

    // populated by Webhook events
    pub column_id: Option<u64>,
}

impl ProjectCard {
    pub fn column_id(&self) -> Option<u64> {
        self.column_id
            .or_else(|| self.column_url.split('/').last()?.parse().ok())
    }

    pub fn issue_number(&self) -> Option<u64> {
        if self.note.is_some() {
            return None;
        }

        self.content_url.as_ref()?.split('/').last()?.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectColumn {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub project_url: String,
    pub cards_url: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[cfg(test)]
mod test {
    use super::ProjectCard;

    #[test]
    fn card_for_issue() {
        const JSON: &str = r#"
            {
                "id": 21567453,
                "node_id": "MDExOlByb2plY3RDYXJkMjE1Njc0NTM=",
                "url": "https://api.github.com/projects/columns/cards/21567453",
                "column_url": "https://api.github.com/projects/columns/5368157",
                "content_url": "https://api.github.com/repos/Codertocat/Hello-World/issues/1",
                "project_url": "https://api.github.com/projects/2640902",
                "note": null,
                "creator": { "login": "Codertocat", "id": 21031067, "type": "User" },
                "created_at": "2019-05-15T15:21:10Z",
                "updated_at": "2019-05-15T15:21:10Z",
                "archived": false
            }
        "#;

        let card: ProjectCard = serde_json::from_str(JSON).unwrap();
        assert_eq!(card.column_id(), Some(5368157));
        assert_eq!(card.issue_number(), Some(1));
    }
}
