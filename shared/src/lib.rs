//! Shared types for the order delivery monitor
//!
//! Contains the order domain model, API endpoint configuration, and the
//! tracing utilities used by both the binary and the test suites.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use config::ApiEndpoints;
pub use errors::*;
pub use models::{Item, ItemStatus, Order};
