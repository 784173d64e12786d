//! Order delivery monitor library
//!
//! This library polls an orders API for medical equipment orders, sends an
//! alert for every item observed as delivered, and pushes each (possibly
//! updated) order back to the update API. The provider behind those three
//! remote calls is injected through the [`OrderProvider`] trait.

pub mod error;
pub mod monitor_impl;
pub mod services;
pub mod traits;

// Re-export main types
pub use error::{MonitorError, MonitorResult};
pub use monitor_impl::OrderMonitor;
pub use services::HttpOrderProvider;
pub use traits::*;
