use super::{
    client::{Pagination, Requester, RequesterExt, Result},
    AddToOrgResponse, DateTime, Role,
};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

const DEFAULT_PER_PAGE: u8 = 30;

/// A user as it is embedded in other resources and webhook payloads
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleUser {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub site_admin: bool,
}

impl SimpleUser {
    pub fn is_bot(&self) -> bool {
        self.user_type == "Bot"
    }

    /// Invite this user to `org`, as a plain member unless a role is given
    pub async fn add_to_org<R>(
        &self,
        requester: &R,
        org: &str,
        role: Option<Role>,
    ) -> Result<AddToOrgResponse>
    where
        R: Requester + ?Sized,
    {
        requester.orgs().add_member(org, &self.login, role).await
    }

    /// Users that follow this user, 30 per page starting at page 1 by default
    pub async fn get_followers<R>(
        &self,
        requester: &R,
        per_page: Option<u8>,
        page: Option<u32>,
    ) -> Result<Vec<SimpleUser>>
    where
        R: Requester + ?Sized,
    {
        let pagination = Self::pagination(per_page, page);
        requester
            .users()
            .followers_of(&self.login, Some(&pagination))
            .await
    }

    /// Users this user follows, 30 per page starting at page 1 by default
    pub async fn get_following<R>(
        &self,
        requester: &R,
        per_page: Option<u8>,
        page: Option<u32>,
    ) -> Result<Vec<SimpleUser>>
    where
        R: Requester + ?Sized,
    {
        let pagination = Self::pagination(per_page, page);
        requester
            .users()
            .following_of(&self.login, Some(&pagination))
            .await
    }

    fn pagination(per_page: Option<u8>, page: Option<u32>) -> Pagination {
        Pagination {
            per_page: Some(per_page.unwrap_or(DEFAULT_PER_PAGE)),
            page: Some(page.unwrap_or(1)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: DateTime,
    #[serde(default)]
    pub updated_at: DateTime,
    #[serde(flatten)]
    pub shared: SimpleUser,
}

impl Deref for PublicUser {
    type Target = SimpleUser;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

impl AsRef<SimpleUser> for PublicUser {
    fn as_ref(&self) -> &SimpleUser {
        &self.shared
    }
}

/// The authenticated user, which carries a few private counters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateUser {
    #[serde(default)]
    pub collaborators: u64,
    #[serde(default)]
    pub disk_usage: u64,
    #[serde(default)]
    pub total_private_repos: u64,
    #[serde(default)]
    pub owned_private_repos: u64,
    #[serde(default)]
    pub private_gists: u64,
    #[serde(default)]
    pub two_factor_authentication: bool,
    #[serde(flatten)]
    pub shared: PublicUser,
}

impl Deref for PrivateUser {
    type Target = PublicUser;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

impl AsRef<PublicUser> for PrivateUser {
    fn as_ref(&self) -> &PublicUser {
        &self.shared
    }
}

impl AsRef<SimpleUser> for PrivateUser {
    fn as_ref(&self) -> &SimpleUser {
        &self.shared.shared
    }
}

/// Author or committer of a git commit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GitUser {
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
}

#[cfg(test)]
mod test {
    use super::{PrivateUser, SimpleUser};
    use crate::client::test::Recorder;

    const USER_JSON: &str = r#"
        {
            "login": "Codertocat",
            "id": 21031067,
            "node_id": "MDQ6VXNlcjIxMDMxMDY3",
            "avatar_url": "https://avatars1.githubusercontent.com/u/21031067?v=4",
            "gravatar_id": "",
            "url": "https://api.github.com/users/Codertocat",
            "html_url": "https://github.com/Codertocat",
            "followers_url": "https://api.github.com/users/Codertocat/followers",
            "following_url": "https://api.github.com/users/Codertocat/following{/other_user}",
            "gists_url": "https://api.github.com/users/Codertocat/gists{/gist_id}",
            "starred_url": "https://api.github.com/users/Codertocat/starred{/owner}{/repo}",
            "subscriptions_url": "https://api.github.com/users/Codertocat/subscriptions",
            "organizations_url": "https://api.github.com/users/Codertocat/orgs",
            "repos_url": "https://api.github.com/users/Codertocat/repos",
            "events_url": "https://api.github.com/users/Codertocat/events{/privacy}",
            "received_events_url": "https://api.github.com/users/Codertocat/received_events",
            "type": "User",
            "site_admin": false
        }
    "#;

    #[test]
    fn user() {
        let user: SimpleUser = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.login, "Codertocat");
        assert_eq!(user.user_type, "User");
        assert!(!user.is_bot());
    }

    #[test]
    fn private_user_derefs_to_simple_user() {
        const PRIVATE_USER_JSON: &str = r#"
            {
                "login": "octocat",
                "id": 1,
                "type": "User",
                "site_admin": false,
                "name": "monalisa octocat",
                "public_repos": 2,
                "followers": 20,
                "following": 0,
                "created_at": "2008-01-14T04:33:35Z",
                "updated_at": "2008-01-14T04:33:35Z",
                "private_gists": 81,
                "total_private_repos": 100,
                "owned_private_repos": 100,
                "disk_usage": 10000,
                "collaborators": 8,
                "two_factor_authentication": true
            }
        "#;

        let user: PrivateUser = serde_json::from_str(PRIVATE_USER_JSON).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name.as_deref(), Some("monalisa octocat"));
        assert_eq!(user.private_gists, 81);
        assert!(user.two_factor_authentication);

        let simple: &SimpleUser = user.as_ref();
        assert_eq!(simple.id, 1);
    }

    #[tokio::test]
    async fn followers_default_to_the_first_page() {
        let requester = Recorder::responding(&format!("[{}]", USER_JSON));
        let user = SimpleUser {
            login: "octocat".to_owned(),
            ..Default::default()
        };

        let followers = user.get_followers(&requester, None, None).await.unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].login, "Codertocat");

        let request = requester.last();
        assert_eq!(request.path, "users/octocat/followers");
        assert!(request
            .query
            .contains(&("per_page".to_owned(), "30".to_owned())));
        assert!(request.query.contains(&("page".to_owned(), "1".to_owned())));
    }
}
