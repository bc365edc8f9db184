use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The three device resources the panel keeps in sync
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Door,
    Network,
    Location,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Door, Resource::Network, Resource::Location];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Network => "network",
            Self::Location => "location",
        }
    }

    /// API path of the resource on the device
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Door => "/door",
            Self::Network => "/network",
            Self::Location => "/location",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar the device reports either as a JSON number or as text.
///
/// The firmware stores some values exactly as they arrived in a form post, so the same
/// field can come back as `51` from one endpoint and `"51"` from another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Decode `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
