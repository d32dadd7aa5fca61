//! Unified error type for the admin client.

use std::fmt;

use super::api::ApiError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::router::RouterError;

/// Unified error type returned by the CLI commands.
#[derive(Debug)]
pub enum AdminError {
    /// Backend call failed.
    Api(ApiError),

    /// Route registration or removal failed.
    Router(RouterError),

    /// Configuration could not be loaded.
    Config(ConfigError),

    /// A command needed a token and none was configured.
    MissingToken,
}

impl AdminError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdminError::Api(err) => err.category(),
            AdminError::Router(_) => ErrorCategory::User,
            AdminError::Config(_) => ErrorCategory::Configuration,
            AdminError::MissingToken => ErrorCategory::Auth,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            AdminError::Api(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Api(err) => err.error_code(),
            AdminError::Router(RouterError::UnnamedDynamicRoute { .. }) => "ROUTE_UNNAMED",
            AdminError::Router(RouterError::DuplicateName(_)) => "ROUTE_DUPLICATE_NAME",
            AdminError::Router(RouterError::RouteNotFound(_)) => "ROUTE_NOT_FOUND",
            AdminError::Config(_) => "CONFIG_INVALID",
            AdminError::MissingToken => "AUTH_MISSING_TOKEN",
        }
    }

    /// Message for the terminal, followed by a recovery hint.
    pub fn user_message(&self) -> String {
        format!("{}\n{}", self, self.category().recovery_hint())
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Api(err) => write!(f, "{}", err),
            AdminError::Router(err) => write!(f, "{}", err),
            AdminError::Config(err) => write!(f, "{}", err),
            AdminError::MissingToken => write!(f, "No admin token configured"),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Api(err) => Some(err),
            AdminError::Router(err) => Some(err),
            AdminError::Config(err) => Some(err),
            AdminError::MissingToken => None,
        }
    }
}

impl From<ApiError> for AdminError {
    fn from(err: ApiError) -> Self {
        AdminError::Api(err)
    }
}

impl From<RouterError> for AdminError {
    fn from(err: RouterError) -> Self {
        AdminError::Router(err)
    }
}

impl From<ConfigError> for AdminError {
    fn from(err: ConfigError) -> Self {
        AdminError::Config(err)
    }
}
