//! Startup: configuration loading and logging setup.
//!
//! # Usage
//!
//! ```ignore
//! use lostfound_admin::startup::{init_tracing, AdminConfig};
//!
//! let config = AdminConfig::load()?;
//! init_tracing(&config.log_level);
//! ```

pub mod config;
pub mod logging;

pub use config::AdminConfig;
pub use logging::init_tracing;
