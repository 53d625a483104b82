use super::DateTime;
use serde::{Deserialize, Serialize};

// GitHub API docs: https://docs.github.com/en/rest/security-advisories/global-advisories

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityAdvisory {
    pub ghsa_id: String,
    pub summary: String,
    pub description: String,
    pub severity: String,
    pub identifiers: Vec<Identifier>,
    pub references: Vec<Reference>,
    pub published_at: DateTime,
    pub updated_at: DateTime,
    pub withdrawn_at: Option<DateTime>,
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
    #[serde(rename = "type")]
    pub identifier_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub package: Package,
    pub severity: String,
    pub vulnerable_version_range: String,
    pub first_patched_version: Option<FirstPatchedVersion>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub ecosystem: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstPatchedVersion {
    pub identifier: String,
}
