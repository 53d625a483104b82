use super::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GpgKey {
    #[serde(flatten)]
    pub key_info: KeyInfo,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub subkeys: Vec<SubKey>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubKey {
    #[serde(flatten)]
    pub key_info: KeyInfo,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub subkeys: Vec<SubKey>,
}

/// What a GPG key is and what it may be used for
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub id: u64,
    pub primary_key_id: Option<u64>,
    pub key_id: String,
    pub public_key: String,
    pub can_sign: bool,
    pub can_encrypt_comms: bool,
    pub can_encrypt_storage: bool,
    pub can_certify: bool,
    pub created_at: DateTime,
    pub expires_at: Option<DateTime>,
    pub raw_key: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub email: String,
    pub verified: bool,
}
