use super::{Organization, Repository, SimpleUser};
use serde::{de, ser, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_chrono(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime(std::time::UNIX_EPOCH.into())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime(datetime)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_rfc3339())
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

// DateTime's from Github can either be in unix epoch time or a string format
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DateTime(
                    v.parse().map_err(|e| E::custom(format!("{}", e)))?,
                ))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                use chrono::{offset::LocalResult, TimeZone};

                match chrono::Utc.timestamp_opt(v, 0) {
                    LocalResult::Single(datetime) => Ok(DateTime(datetime)),
                    _ => Err(E::custom(format!("'{}' is not a legal timestamp", v))),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_i64(v as i64)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_u64(DateTimeVisitor)
        }
    }
}

/// How the author of a comment, issue or pull request is associated with the repository
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Association {
    Collaborator,
    Contributor,
    FirstTimer,
    FirstTimeContributor,
    Mannequin,
    Member,
    None,
    Owner,
}

impl Default for Association {
    fn default() -> Self {
        Association::None
    }
}

/// The previous value of a field that was edited
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub from: String,
}

/// Fields shared by every payload that is delivered for a repository
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoEventInfo {
    pub repository: Repository,
    pub organization: Option<Organization>,
    pub installation: Option<Value>,
    pub sender: SimpleUser,
}

/// Fields shared by every payload that is delivered for an organization
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgEventInfo {
    pub organization: Organization,
    pub installation: Option<Value>,
    pub sender: SimpleUser,
}
