//! Shared error types for the order delivery monitor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Missing configuration: {field} (set the {env_var} environment variable or pass the flag)")]
    MissingConfig { field: String, env_var: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
