//! # Configuration
//!
//! Where the admin API lives and how the clients talk to it.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::api::LoginRoute;

/// Production API base.
pub const DEFAULT_API_BASE_URL: &str = "https://backend.cauhec.org/api/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported configuration format `{0}`; use yaml or json")]
    UnsupportedFormat(String),
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Settings shared by the web client and the CLI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the admin API, without a trailing slash.
    pub api_base_url: String,

    /// Extra base URLs to try for login after the primary one, in order.
    pub login_fallback_urls: Vec<String>,

    /// Relay prefix tried last for login; the encoded target URL is appended.
    pub login_relay_prefix: Option<String>,

    /// Per-request timeout on native targets.
    pub request_timeout_secs: u64,

    /// Logging level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_fallback_urls: Vec::new(),
            login_relay_prefix: None,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Ordered login routes: the primary base, each fallback base, then the
    /// relay if one is configured.
    #[must_use]
    pub fn login_routes(&self) -> Vec<LoginRoute> {
        let primary = self.api_base_url.trim_end_matches('/').to_string();
        let mut routes = vec![LoginRoute::direct(primary.clone())];
        routes.extend(
            self.login_fallback_urls
                .iter()
                .map(|url| url.trim())
                .filter(|url| !url.is_empty())
                .map(|url| LoginRoute::direct(url.trim_end_matches('/'))),
        );
        if let Some(prefix) = self
            .login_relay_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
        {
            routes.push(LoginRoute::relay(prefix, primary));
        }
        routes
    }

    /// Checks every field and reports all problems at once.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] listing each problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let mut bases = vec![("api_base_url", self.api_base_url.as_str())];
        bases.extend(
            self.login_fallback_urls
                .iter()
                .map(|url| ("login_fallback_urls", url.as_str())),
        );
        for (field, value) in bases {
            match url::Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!("{field}: unsupported scheme `{}`", url.scheme())),
                Err(err) => errors.push(format!("{field}: `{value}` is not a valid URL ({err})")),
            }
        }

        if self.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod load {
    use super::{ClientConfig, ConfigError};
    use std::{env, fs, path::Path};

    impl ClientConfig {
        /// Loads the configuration from a file, environment variables, or defaults.
        ///
        /// File values win over the environment; an environment variable only
        /// applies while its field still holds the default. `base_url_override`
        /// wins over both.
        ///
        /// # Errors
        /// Unreadable or unparsable files, and any validation failure.
        pub fn load_config(
            config_path: Option<&Path>,
            base_url_override: Option<&str>,
        ) -> Result<Self, ConfigError> {
            let defaults = Self::with_defaults();
            let mut config = match config_path {
                Some(path) => Self::from_file(path)?,
                None => defaults.clone(),
            };

            if config.api_base_url == defaults.api_base_url {
                if let Ok(url) = env::var("CAUHEC_API_BASE_URL") {
                    config.api_base_url = url;
                }
            }
            if config.login_fallback_urls.is_empty() {
                if let Ok(urls) = env::var("CAUHEC_LOGIN_FALLBACK_URLS") {
                    config.login_fallback_urls = urls
                        .split(',')
                        .map(str::trim)
                        .filter(|url| !url.is_empty())
                        .map(str::to_string)
                        .collect();
                }
            }
            if config.login_relay_prefix.is_none() {
                config.login_relay_prefix = env::var("CAUHEC_LOGIN_RELAY_PREFIX")
                    .ok()
                    .filter(|prefix| !prefix.trim().is_empty());
            }
            if config.request_timeout_secs == defaults.request_timeout_secs {
                if let Ok(secs) = env::var("CAUHEC_REQUEST_TIMEOUT_SECS") {
                    config.request_timeout_secs = secs.trim().parse().map_err(|_| {
                        ConfigError::Invalid(vec![format!(
                            "CAUHEC_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got `{secs}`"
                        )])
                    })?;
                }
            }
            if config.log_level == defaults.log_level {
                if let Ok(level) = env::var("CAUHEC_LOG_LEVEL") {
                    config.log_level = level;
                }
            }

            if let Some(url) = base_url_override {
                config.api_base_url = url.to_string();
            }
            config.api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();

            config.validate()?;
            Ok(config)
        }

        fn from_file(path: &Path) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path)?;
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => {
                    serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
                }
                Some("json") => serde_json::from_str(&content)
                    .map_err(|err| ConfigError::Parse(err.to_string())),
                other => Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )),
            }
        }
    }
}
