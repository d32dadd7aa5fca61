//! Lost-and-found admin - API client and route table for the admin dashboard
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod router;
pub mod startup;
pub mod traits;
