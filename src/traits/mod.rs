//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport used by [`crate::api::ApiClient`]
//! - [`RouteRegistry`] - Named route storage, implemented by [`crate::router::RouterState`]
//! - [`PageReloader`] - Full reload fallback used by [`crate::router::reset_router`]

pub mod http;
pub mod navigation;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use navigation::{PageReloader, RouteRegistry};
