//! Credentials for the upstream API.
//!
//! The key and host come from the environment, never from source. A missing
//! variable is a startup error for the operator to fix; there is no fallback
//! to a placeholder key.

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "COVID_API_KEY";
pub const API_HOST_VAR: &str = "COVID_API_HOST";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_host: String,
}

impl Config {
    /// Read both variables, failing on the first one that is unset or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require(API_KEY_VAR)?,
            api_host: require(API_HOST_VAR)?,
        })
    }
}

fn require(var: &'static str) -> Result<String> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingConfig(var)),
    }
}
