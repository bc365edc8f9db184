use anyhow::{Context, Result, ensure};
use std::{env, time::Duration};

/// Address of the device while it runs its setup access point
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Panel configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Door controller the panel talks to
    pub device: DeviceConfig,
}

#[derive(Clone, Debug)]
pub struct DeviceConfig {
    /// Origin of the device HTTP API, without trailing slash
    pub url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load all configuration from environment variables
    pub fn load() -> Result<Self> {
        let device = DeviceConfig::load()?;

        Ok(Self { device })
    }
}

impl DeviceConfig {
    fn load() -> Result<Self> {
        Self::from_values(
            env::var("DAWNDOOR_URL").ok(),
            env::var("DAWNDOOR_REQUEST_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let url = url
            .unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "failed to parse DAWNDOOR_URL: expected an http(s) origin, got {url:?}"
        );

        let timeout_secs = match timeout_secs {
            Some(value) => value
                .parse::<u64>()
                .context("failed to parse DAWNDOOR_REQUEST_TIMEOUT_SECS: invalid format")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_setup_access_point() {
        let config = DeviceConfig::from_values(None, None).expect("defaults are valid");

        assert_eq!(config.url, "http://192.168.4.1");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = DeviceConfig::from_values(Some("http://10.0.0.2/".to_string()), None)
            .expect("valid url");

        assert_eq!(config.url, "http://10.0.0.2");
    }

    #[test]
    fn rejects_non_http_origin() {
        let result = DeviceConfig::from_values(Some("10.0.0.2".to_string()), None);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("DAWNDOOR_URL")
        );
    }

    #[test]
    fn rejects_invalid_timeout() {
        let result = DeviceConfig::from_values(None, Some("soon".to_string()));

        assert!(result.is_err());
    }
}
