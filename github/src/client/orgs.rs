use crate::{
    client::{fetch, Method, Request, Requester, Result},
    AddToOrgResponse, Role,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddToOrgBody {
    pub role: Role,
}

impl AddToOrgBody {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

/// `OrgsClient` handles communication with the organization related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/orgs
pub struct OrgsClient<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: Requester + ?Sized> OrgsClient<'a, R> {
    pub(super) fn new(requester: &'a R) -> Self {
        Self { inner: requester }
    }

    /// Invite `user` to `org`, or update their role if they are already a member.
    /// Without a role the user is added as a plain member.
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/orgs/members#set-organization-membership-for-a-user
    pub async fn add_member(
        &self,
        org: &str,
        user: &str,
        role: Option<Role>,
    ) -> Result<AddToOrgResponse> {
        let url = format!("orgs/{}/memberships/{}", org, user);
        let body = AddToOrgBody::new(role.unwrap_or_default());
        let request = Request::new(Method::Put, url).json(&body)?;
        fetch(self.inner, request).await
    }
}
