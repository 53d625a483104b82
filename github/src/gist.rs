use super::{DateTime, SimpleUser};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A gist as it appears in list responses, file contents omitted
///
/// GitHub API docs: https://docs.github.com/en/rest/gists/gists
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleGist {
    pub id: String,
    pub node_id: String,
    pub url: String,
    pub forks_url: String,
    pub commits_url: String,
    pub git_pull_url: String,
    pub git_push_url: String,
    pub html_url: String,
    pub comments_url: String,
    pub public: bool,
    pub description: Option<String>,
    pub comments: u64,
    pub user: Option<SimpleUser>,
    pub files: HashMap<String, File>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    pub owner: Option<SimpleUser>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(flatten)]
    pub shared: SimpleGist,
}

impl std::ops::Deref for Gist {
    type Target = SimpleGist;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub filename: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub language: Option<String>,
    pub raw_url: String,
    pub size: u64,
    pub truncated: Option<bool>,
    pub content: Option<String>,
}

#[cfg(test)]
mod test {
    use super::Gist;

    #[test]
    fn gist() {
        const JSON: &str = r#"
            {
                "url": "https://api.github.com/gists/aa5a315d61ae9438b18d",
                "id": "aa5a315d61ae9438b18d",
                "node_id": "MDQ6R2lzdGFhNWEzMTVkNjFhZTk0MzhiMThk",
                "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
                "files": {
                    "hello_world.rb": {
                        "filename": "hello_world.rb",
                        "type": "application/x-ruby",
                        "language": "Ruby",
                        "raw_url": "https://gist.githubusercontent.com/octocat/6cad326836d38bd3a7ae/raw/hello_world.rb",
                        "size": 167,
                        "truncated": false,
                        "content": "class HelloWorld\nend"
                    }
                },
                "public": true,
                "created_at": "2010-04-14T02:15:15Z",
                "updated_at": "2011-06-20T11:34:15Z",
                "description": "Hello World Examples",
                "comments": 0,
                "user": null,
                "owner": { "login": "octocat", "id": 1, "type": "User" },
                "truncated": false
            }
        "#;

        let gist: Gist = serde_json::from_str(JSON).unwrap();
        assert_eq!(gist.id, "aa5a315d61ae9438b18d");
        assert_eq!(gist.owner.as_ref().map(|o| o.login.as_str()), Some("octocat"));
        let file = &gist.files["hello_world.rb"];
        assert_eq!(file.file_type, "application/x-ruby");
        assert_eq!(file.size, 167);
    }
}
