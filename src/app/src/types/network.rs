use serde::{Deserialize, Deserializer, Serialize};

use super::common::null_as_default;

fn default_can_start_ap() -> bool {
    true
}

/// Accept `true`, `"true"` and `"True"` alike; the firmware echoes form values as text.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    match Option::<BoolOrText>::deserialize(deserializer)? {
        None => Ok(default_can_start_ap()),
        Some(BoolOrText::Bool(b)) => Ok(b),
        Some(BoolOrText::Text(s)) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value: {other}"
            ))),
        },
    }
}

/// WiFi configuration as reported by `/network`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Station address; `None` while the device is not connected. Never written.
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub essid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    /// Whether the device may fall back to its setup access point
    #[serde(default = "default_can_start_ap", deserialize_with = "flexible_bool")]
    pub can_start_ap: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ip_address: None,
            essid: String::new(),
            password: String::new(),
            can_start_ap: default_can_start_ap(),
        }
    }
}

/// Editable network fields; also the body of a `/network` write
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkFormData {
    pub essid: String,
    pub password: String,
    pub can_start_ap: bool,
}

impl Default for NetworkFormData {
    fn default() -> Self {
        Self::from(&NetworkConfig::default())
    }
}

impl From<&NetworkConfig> for NetworkFormData {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            essid: config.essid.clone(),
            password: config.password.clone(),
            can_start_ap: config.can_start_ap,
        }
    }
}
