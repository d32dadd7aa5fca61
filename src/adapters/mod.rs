//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ReloadSignal`] - Reload fallback that lets the host rebuild its router
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::CountingReloader`] - Counts reload calls

pub mod mock;
pub mod reload_signal;
pub mod reqwest_http;

pub use mock::{CountingReloader, MockHttpClient};
pub use reload_signal::ReloadSignal;
pub use reqwest_http::ReqwestHttpClient;
