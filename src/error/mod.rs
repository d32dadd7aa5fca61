//! Error handling for the admin client.
//!
//! - [`ApiError`]: a backend call failed (transport, status, decode, business code)
//! - [`RouterError`]: route registration or removal failed
//! - [`ConfigError`]: configuration could not be loaded
//! - [`AdminError`]: umbrella type used by the CLI, with [`ErrorCategory`] classification
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | Missing/rejected token | No |
//! | Server | 5xx, rejected business code | Yes |
//! | Client | Undecodable response | No |
//! | User | Bad input, bad route definitions | No |
//! | Configuration | Config file or env issues | No |

mod admin_error;
mod api;
mod category;
mod config;
mod result;
mod router;

pub use admin_error::AdminError;
pub use api::ApiError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use result::AdminResult;
pub use router::RouterError;
