use crate::client::{Error, Result};
use url::Url;

/// First path segments of html urls that belong to GitHub itself rather than to an owner
const RESERVED_SEGMENTS: &[&str] = &[
    "orgs",
    "users",
    "settings",
    "organizations",
    "notifications",
    "marketplace",
    "sponsors",
    "search",
    "apps",
    "login",
];

/// Extracts the owner and repository name from a GitHub url.
///
/// Both html urls (`https://github.com/owner/repo/commit/...`) and API urls
/// (`https://api.github.com/repos/owner/repo/...`, including the `/api/v3` prefix used by
/// GitHub Enterprise) are understood.
pub fn owner_and_repo(url: &str) -> Result<(String, String)> {
    let not_a_repo = || Error::from(format!("'{}' does not name a repository", url));

    let parsed = Url::parse(url)?;
    let is_api_host = parsed
        .host_str()
        .map_or(false, |host| host.starts_with("api."));
    let segments: Vec<&str> = parsed
        .path_segments()
        .ok_or_else(not_a_repo)?
        .filter(|segment| !segment.is_empty())
        .collect();

    let repo_segments = match segments.as_slice() {
        ["api", "v3", "repos", rest @ ..] => rest,
        ["api", "v3", ..] => return Err(not_a_repo()),
        ["repos", rest @ ..] if is_api_host => rest,
        _ if is_api_host => return Err(not_a_repo()),
        [first, ..] if RESERVED_SEGMENTS.contains(first) => return Err(not_a_repo()),
        rest => rest,
    };

    match repo_segments {
        [owner, repo, ..] => Ok(((*owner).to_owned(), (*repo).to_owned())),
        _ => Err(not_a_repo()),
    }
}

#[cfg(test)]
mod test {
    use super::owner_and_repo;

    #[test]
    fn html_urls() {
        let commit = "https://github.com/Codertocat/Hello-World/commit/6113728f27ae82c7b1a177c8d03f9e96e0adf246";
        assert_eq!(
            owner_and_repo(commit).unwrap(),
            ("Codertocat".to_owned(), "Hello-World".to_owned())
        );

        let comment =
            "https://github.com/Codertocat/Hello-World/commit/6113728f#commitcomment-33548674";
        assert_eq!(owner_and_repo(comment).unwrap().1, "Hello-World");
    }

    #[test]
    fn api_urls() {
        let api = "https://api.github.com/repos/octocat/Hello-World/comments/1";
        assert_eq!(
            owner_and_repo(api).unwrap(),
            ("octocat".to_owned(), "Hello-World".to_owned())
        );

        let enterprise = "https://ghe.example.com/api/v3/repos/octocat/linguist/commits/abc";
        assert_eq!(
            owner_and_repo(enterprise).unwrap(),
            ("octocat".to_owned(), "linguist".to_owned())
        );
    }

    #[test]
    fn not_a_repository() {
        assert!(owner_and_repo("https://github.com/octocat").is_err());
        assert!(owner_and_repo("not a url").is_err());
        assert!(owner_and_repo("https://api.github.com/repos/octocat").is_err());
        assert!(owner_and_repo("https://api.github.com/users/octocat/repos").is_err());
        assert!(owner_and_repo("https://api.github.com/orgs/octo-org/members").is_err());
        assert!(owner_and_repo("https://ghe.example.com/api/v3/users/octocat/repos").is_err());
        assert!(owner_and_repo("https://github.com/orgs/octo-org/teams").is_err());
        assert!(owner_and_repo("https://github.com/settings/profile").is_err());
    }
}
