use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use crate::presentation::web::views::Theme;

pub const MISSING_API_KEY_MESSAGE: &str =
    "Please set up your API key: set NEWSBOARD_API_KEY in the environment or in a .env file";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,
}

/// Provider API key. Redacted in `Debug` and `Display`; call sites that
/// need the value must go through [`ApiKey::expose`].
#[derive(Clone, Eq, PartialEq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self(value.trim().to_string()))
    }

    /// Resolve the key from an optional setting, failing when it is absent
    /// or blank.
    pub fn from_setting(value: Option<String>) -> Result<Self, ConfigError> {
        value.map_or(Err(ConfigError::MissingApiKey), Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub api_url: url::Url,
    pub api_key: ApiKey,
    pub request_timeout: Duration,
    pub theme: Theme,
    pub refresh_interval: Duration,
}
