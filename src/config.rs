//! Server configuration
//!
//! Built either programmatically through [`AppConfigBuilder`] or from the
//! environment with [`AppConfig::from_env`].

use std::path::PathBuf;
use thiserror::Error;

use crate::shared::constants::{DEFAULT_SEARCH_LIMIT, DEFAULT_SIGN_IN_URL, DEFAULT_SIGN_OUT_URL};

pub const ENV_DIRECTORY_FILE: &str = "NAVBAR_DIRECTORY_FILE";
pub const ENV_SESSION_FILE: &str = "NAVBAR_SESSION_FILE";
pub const ENV_SEARCH_LIMIT: &str = "NAVBAR_SEARCH_LIMIT";
pub const ENV_SIGN_IN_URL: &str = "NAVBAR_SIGN_IN_URL";
pub const ENV_SIGN_OUT_URL: &str = "NAVBAR_SIGN_OUT_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON array of users served by the search backend
    pub directory_file: Option<PathBuf>,
    /// JSON object describing the signed-in user; absent means anonymous
    pub session_file: Option<PathBuf>,
    /// Maximum number of users returned per search
    pub search_limit: usize,
    pub sign_in_url: String,
    pub sign_out_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory_file: None,
            session_file: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
            sign_out_url: DEFAULT_SIGN_OUT_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read configuration from `NAVBAR_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(path) = lookup(ENV_DIRECTORY_FILE) {
            builder = builder.directory_file(path);
        }
        if let Some(path) = lookup(ENV_SESSION_FILE) {
            builder = builder.session_file(path);
        }
        if let Some(raw) = lookup(ENV_SEARCH_LIMIT) {
            let limit = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber { key: ENV_SEARCH_LIMIT, value: raw })?;
            builder = builder.search_limit(limit);
        }
        if let Some(url) = lookup(ENV_SIGN_IN_URL) {
            builder = builder.sign_in_url(url);
        }
        if let Some(url) = lookup(ENV_SIGN_OUT_URL) {
            builder = builder.sign_out_url(url);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_limit == 0 {
            return Err(ConfigError::ZeroSearchLimit);
        }
        if self.sign_in_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("sign_in_url"));
        }
        if self.sign_out_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("sign_out_url"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    directory_file: Option<PathBuf>,
    session_file: Option<PathBuf>,
    search_limit: Option<usize>,
    sign_in_url: Option<String>,
    sign_out_url: Option<String>,
}

impl AppConfigBuilder {
    pub fn directory_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory_file = Some(path.into());
        self
    }

    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn search_limit(mut self, limit: usize) -> Self {
        self.search_limit = Some(limit);
        self
    }

    pub fn sign_in_url(mut self, url: impl Into<String>) -> Self {
        self.sign_in_url = Some(url.into());
        self
    }

    pub fn sign_out_url(mut self, url: impl Into<String>) -> Self {
        self.sign_out_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            directory_file: self.directory_file,
            session_file: self.session_file,
            search_limit: self.search_limit.unwrap_or(defaults.search_limit),
            sign_in_url: self.sign_in_url.unwrap_or(defaults.sign_in_url),
            sign_out_url: self.sign_out_url.unwrap_or(defaults.sign_out_url),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("search limit must be greater than zero")]
    ZeroSearchLimit,
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.sign_in_url, "/sign-in");
    }

    #[test]
    fn test_reads_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DIRECTORY_FILE, "fixtures/users.json"),
            (ENV_SEARCH_LIMIT, " 25 "),
            (ENV_SIGN_IN_URL, "https://accounts.example.com/sign-in"),
        ]))
        .unwrap();

        assert_eq!(config.directory_file, Some(PathBuf::from("fixtures/users.json")));
        assert_eq!(config.session_file, None);
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.sign_in_url, "https://accounts.example.com/sign-in");
    }

    #[test]
    fn test_rejects_bad_limit() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_SEARCH_LIMIT, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = AppConfig::builder().search_limit(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroSearchLimit);
    }

    #[test]
    fn test_rejects_blank_sign_in_url() {
        let err = AppConfig::builder().sign_in_url("  ").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("sign_in_url"));
    }
}
