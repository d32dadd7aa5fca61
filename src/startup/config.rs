//! Admin client configuration.
//!
//! Values come from an optional JSON file, then environment overrides:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LOSTFOUND_ADMIN_CONFIG` | Path of the config file |
//! | `LOSTFOUND_API_URL` | `api_base_url` |
//! | `LOSTFOUND_TOKEN` | `token` |
//! | `LOSTFOUND_FLATTEN_ROUTES` | `routes.third_level_route_cache` |
//! | `LOSTFOUND_LOG` | `log_level` |

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::router::RouteSettings;

pub const CONFIG_PATH_ENV: &str = "LOSTFOUND_ADMIN_CONFIG";
pub const API_URL_ENV: &str = "LOSTFOUND_API_URL";
pub const TOKEN_ENV: &str = "LOSTFOUND_TOKEN";
pub const FLATTEN_ROUTES_ENV: &str = "LOSTFOUND_FLATTEN_ROUTES";
pub const LOG_ENV: &str = "LOSTFOUND_LOG";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the admin client.
///
/// # Example
///
/// ```ignore
/// use lostfound_admin::startup::AdminConfig;
///
/// let config = AdminConfig::default()
///     .with_api_base_url("http://lostfound.internal/api")
///     .with_token("abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    /// Backend root every endpoint path is joined to
    pub api_base_url: String,
    /// Bearer token from a previous login
    pub token: Option<String>,
    /// Per-request timeout (default: 5)
    pub request_timeout_secs: u64,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub routes: RouteSettings,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
            routes: RouteSettings::default(),
        }
    }
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_routes(mut self, routes: RouteSettings) -> Self {
        self.routes = routes;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `$LOSTFOUND_ADMIN_CONFIG`, else `~/.lostfound-admin/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::home_dir().map(|home| home.join(".lostfound-admin").join("config.json")),
        }
    }

    /// Load the config file (if present) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        base.apply_env()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply the `LOSTFOUND_*` overrides on top of `self`.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = non_empty_var(API_URL_ENV) {
            self.api_base_url = url;
        }
        if let Some(token) = non_empty_var(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(flag) = non_empty_var(FLATTEN_ROUTES_ENV) {
            self.routes.third_level_route_cache = parse_flag(FLATTEN_ROUTES_ENV, &flag)?;
        }
        if let Some(level) = non_empty_var(LOG_ENV) {
            self.log_level = level;
        }
        Ok(self)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
