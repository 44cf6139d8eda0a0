//! Build-time configuration of the web client.
//!
//! Values are baked in when the bundle is compiled; the browser has no
//! environment or config file to read at run time.

use shared::config::{ClientConfig, DEFAULT_API_BASE_URL};

/// Web client settings taken from `CAUHEC_*` variables at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub api_base_url: String,
    pub login_fallback_urls: Vec<String>,
    pub login_relay_prefix: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("CAUHEC_API_BASE_URL"),
            option_env!("CAUHEC_LOGIN_FALLBACK_URLS"),
            option_env!("CAUHEC_LOGIN_RELAY_PREFIX"),
        )
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(base: Option<&str>, fallbacks: Option<&str>, relay: Option<&str>) -> Self {
        let non_blank = |value: &str| !value.trim().is_empty();
        Self {
            api_base_url: base
                .filter(|value| non_blank(value))
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim()
                .trim_end_matches('/')
                .to_string(),
            login_fallback_urls: fallbacks
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|url| !url.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            login_relay_prefix: relay
                .filter(|value| non_blank(value))
                .map(|value| value.trim().to_string()),
        }
    }

    /// The shared client configuration. Invalid values fall back to the
    /// defaults with a console warning.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig {
            api_base_url: self.api_base_url.clone(),
            login_fallback_urls: self.login_fallback_urls.clone(),
            login_relay_prefix: self.login_relay_prefix.clone(),
            ..ClientConfig::with_defaults()
        };
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                web_sys::console::warn_1(&format!("Invalid build configuration: {err}").into());
                ClientConfig::with_defaults()
            }
        }
    }
}
