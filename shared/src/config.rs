//! API endpoint configuration
//!
//! The monitor talks to three endpoints: one to fetch orders, one to post
//! delivery alerts, and one to push updated orders back. Each is resolved
//! from an optional CLI override falling back to an environment variable.

use std::env;

use crate::errors::{SharedError, SharedResult};

pub const ORDERS_URL_ENV: &str = "ORDERS_API_URL";
pub const ALERT_URL_ENV: &str = "ALERT_API_URL";
pub const UPDATE_URL_ENV: &str = "UPDATE_API_URL";

/// The three endpoints the monitor talks to during a processing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub orders: String,
    pub alert: String,
    pub update: String,
}

impl ApiEndpoints {
    pub fn new(orders: impl Into<String>, alert: impl Into<String>, update: impl Into<String>) -> Self {
        Self {
            orders: orders.into(),
            alert: alert.into(),
            update: update.into(),
        }
    }

    /// Resolve endpoints from CLI overrides, falling back to environment
    /// variables for anything not overridden.
    pub fn resolve(
        orders: Option<String>,
        alert: Option<String>,
        update: Option<String>,
    ) -> SharedResult<Self> {
        Ok(Self {
            orders: resolve_endpoint(orders, "orders", ORDERS_URL_ENV)?,
            alert: resolve_endpoint(alert, "alert", ALERT_URL_ENV)?,
            update: resolve_endpoint(update, "update", UPDATE_URL_ENV)?,
        })
    }

    /// Resolve all endpoints from the environment alone.
    pub fn from_env() -> SharedResult<Self> {
        Self::resolve(None, None, None)
    }
}

fn resolve_endpoint(override_value: Option<String>, field: &str, env_var: &str) -> SharedResult<String> {
    let value = match override_value {
        Some(value) => value,
        None => env::var(env_var).map_err(|_| SharedError::MissingConfig {
            field: field.to_string(),
            env_var: env_var.to_string(),
        })?,
    };

    if value.trim().is_empty() {
        return Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}
