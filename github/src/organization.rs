use super::SimpleUser;
use serde::{Deserialize, Serialize};
use strum::{EnumString, EnumVariantNames};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub repos_url: String,
    pub events_url: String,
    pub hooks_url: String,
    pub issues_url: String,
    pub members_url: String,
    pub public_members_url: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub privacy: String,
    pub permission: String,
    pub members_url: String,
    pub repositories_url: String,
    pub parent: Option<Box<Team>>,
}

/// A team as it shows up in team, membership and team_add payloads
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleTeam {
    pub id: u64,
    pub node_id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub privacy: Option<String>,
    pub permission: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub members_url: Option<String>,
    pub repositories_url: Option<String>,
}

/// The role a user holds within an organization
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    Member,
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

/// Response to adding or updating an organization membership
///
/// GitHub API docs: https://docs.github.com/en/rest/orgs/members#set-organization-membership-for-a-user
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddToOrgResponse {
    pub url: String,
    pub state: String,
    pub role: Role,
    pub organization_url: String,
    pub organization: Organization,
    pub user: SimpleUser,
}

#[cfg(test)]
mod test {
    use super::{Organization, Role};
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn org() {
        const ORGANIZATION_JSON: &str = r#"
            {
                "login": "Octocoders",
                "id": 38302899,
                "node_id": "MDEyOk9yZ2FuaXphdGlvbjM4MzAyODk5",
                "url": "https://api.github.com/orgs/Octocoders",
                "repos_url": "https://api.github.com/orgs/Octocoders/repos",
                "events_url": "https://api.github.com/orgs/Octocoders/events",
                "hooks_url": "https://api.github.com/orgs/Octocoders/hooks",
                "issues_url": "https://api.github.com/orgs/Octocoders/issues",
                "members_url": "https://api.github.com/orgs/Octocoders/members{/member}",
                "public_members_url": "https://api.github.com/orgs/Octocoders/public_members{/member}",
                "avatar_url": "https://avatars1.githubusercontent.com/u/38302899?v=4",
                "description": ""
            }
        "#;

        let org: Organization = serde_json::from_str(ORGANIZATION_JSON).unwrap();
        assert_eq!(org.login, "Octocoders");
        assert_eq!(org.description.as_deref(), Some(""));
    }

    #[test]
    fn role() {
        assert_eq!(Role::default(), Role::Member);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert!(Role::from_str("owner").is_err());
        assert_eq!(Role::VARIANTS, &["admin", "member"]);
        assert_eq!(
            serde_json::to_string(&Role::Admin).unwrap(),
            r#""admin""#
        );
    }
}
