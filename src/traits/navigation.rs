//! Navigation trait abstractions.
//!
//! [`RouteRegistry`] is the part of the router that dynamic-route reset
//! needs; [`PageReloader`] is the last-resort full reload.

use crate::error::RouterError;
use crate::router::NormalizedRoute;

/// A mutable set of registered routes addressable by name.
pub trait RouteRegistry {
    /// Snapshot of every registered route, parents before children.
    fn routes(&self) -> Vec<NormalizedRoute>;

    /// Whether a route with this name is currently registered.
    fn has_route(&self, name: &str) -> bool;

    /// Remove the named route together with its children.
    fn remove_route(&mut self, name: &str) -> Result<(), RouterError>;
}

/// Performs an unconditional full reload of the application.
///
/// Used when targeted route removal fails and the registry can no longer be
/// trusted to be in a clean state.
pub trait PageReloader {
    /// Reload the whole application.
    fn reload(&self);
}
