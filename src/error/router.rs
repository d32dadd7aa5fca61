//! Errors raised by the router state object.

use thiserror::Error;

/// Failure to register or deregister a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A permission-gated route was registered without a name, so it could
    /// never be removed selectively.
    #[error("Route '{path}' declares roles but has no name")]
    UnnamedDynamicRoute { path: String },

    /// Another registered route already uses this name.
    #[error("A route named '{0}' is already registered")]
    DuplicateName(String),

    /// No registered route carries this name.
    #[error("No route named '{0}'")]
    RouteNotFound(String),
}
