use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Scalar};

pub const TIMEZONE_NOT_SET: &str = "(not set)";
pub const TIMEZONE_NOT_FOUND: &str = "(not found)";

/// Entry of the bundled timezone table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Standard (winter) offset from UTC in hours
    pub utc_offset_hours: i8,
    pub observes_dst: bool,
}

pub const TIMEZONES: [TimezoneInfo; 6] = [
    TimezoneInfo {
        code: "PST",
        name: "Pacific Time",
        utc_offset_hours: -8,
        observes_dst: true,
    },
    TimezoneInfo {
        code: "AMT",
        name: "Arizona Time",
        utc_offset_hours: -7,
        observes_dst: false,
    },
    TimezoneInfo {
        code: "MST",
        name: "Mountain Time",
        utc_offset_hours: -7,
        observes_dst: true,
    },
    TimezoneInfo {
        code: "CST",
        name: "Central Time",
        utc_offset_hours: -6,
        observes_dst: true,
    },
    TimezoneInfo {
        code: "EST",
        name: "Eastern Time",
        utc_offset_hours: -5,
        observes_dst: true,
    },
    TimezoneInfo {
        code: "AST",
        name: "Atlantic Time",
        utc_offset_hours: -4,
        observes_dst: true,
    },
];

pub fn lookup_timezone(code: &str) -> Option<&'static TimezoneInfo> {
    TIMEZONES.iter().find(|tz| tz.code == code)
}

/// Human readable name for a timezone code, with the panel's fallbacks
pub fn timezone_display_name(code: &str) -> &'static str {
    if code.is_empty() {
        return TIMEZONE_NOT_SET;
    }
    lookup_timezone(code).map_or(TIMEZONE_NOT_FOUND, |tz| tz.name)
}

/// Location and timezone as reported by `/location`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: Scalar,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: Scalar,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
}

/// Editable location fields; also the body of a `/location` write
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationFormData {
    pub timezone: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<&LocationConfig> for LocationFormData {
    fn from(config: &LocationConfig) -> Self {
        Self {
            timezone: config.timezone.clone(),
            latitude: config.latitude.to_string(),
            longitude: config.longitude.to_string(),
        }
    }
}
