use super::{require, Builder};
use crate::{
    client::{
        gists::{create_request, list_for_user_request, update_request},
        CreateGistBody, FileContents, Pagination, PatchGistBody, Request, Result,
    },
    Gist,
};
use std::fmt::Display;

/// List the public gists of a user
///
/// GitHub API docs: https://docs.github.com/en/rest/gists/gists#list-gists-for-a-user
#[derive(Clone, Debug, Default)]
pub struct GetGistsBuilder {
    owner: String,
    options: Pagination,
}

impl GetGistsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.options.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.options.page = Some(page);
        self
    }
}

impl Builder for GetGistsBuilder {
    type Response = Vec<Gist>;

    fn request(&self) -> Result<Request> {
        require(&self.owner, "owner")?;
        list_for_user_request(&self.owner, Some(&self.options))
    }
}

/// Create a gist with one or more files.
///
/// Don't name files `gistfile` followed by a number, GitHub uses that scheme for its own naming.
///
/// GitHub API docs: https://docs.github.com/en/rest/gists/gists#create-a-gist
#[derive(Clone, Debug, Default)]
pub struct CreateGistBuilder {
    body: CreateGistBody,
}

impl CreateGistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.body.description = Some(description.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.body.public = public;
        self
    }

    pub fn file<A, B>(mut self, name: A, contents: B) -> Self
    where
        A: Into<String>,
        B: Display,
    {
        self.body
            .files
            .insert(name.into(), FileContents::from(contents));
        self
    }
}

impl Builder for CreateGistBuilder {
    type Response = Gist;

    fn request(&self) -> Result<Request> {
        create_request(&self.body)
    }
}

/// Update a gist. Files that are not mentioned keep their contents.
///
/// GitHub API docs: https://docs.github.com/en/rest/gists/gists#update-a-gist
#[derive(Clone, Debug, Default)]
pub struct PatchGistBuilder {
    gist_id: String,
    body: PatchGistBody,
}

impl PatchGistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gist_id<T: Into<String>>(mut self, gist_id: T) -> Self {
        self.gist_id = gist_id.into();
        self
    }

    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.body.description = Some(description.into());
        self
    }

    pub fn file<A, B>(mut self, name: A, contents: B) -> Self
    where
        A: Into<String>,
        B: Display,
    {
        self.body
            .files
            .insert(name.into(), FileContents::from(contents));
        self
    }
}

impl Builder for PatchGistBuilder {
    type Response = Gist;

    fn request(&self) -> Result<Request> {
        if self.gist_id.is_empty() {
            return Err("a gist id is required to update a gist".into());
        }
        update_request(&self.gist_id, &self.body)
    }
}
