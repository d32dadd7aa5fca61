//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`CountingReloader`] - Page reloader that records calls

pub mod http;
pub mod reloader;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use reloader::CountingReloader;
