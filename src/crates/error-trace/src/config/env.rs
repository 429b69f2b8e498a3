//! Environment variable loading utilities
//!
//! Helper functions for loading and parsing environment variables with proper error handling.

use std::env;
use std::str::FromStr;

use super::{ConfigError, Result};

/// Load an environment variable as a string
///
/// # Returns
///
/// * `Ok(Some(value))` if variable exists
/// * `Ok(None)` if variable doesn't exist
/// * `Err` if variable exists but has invalid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key.to_string())),
    }
}

/// Load and parse an environment variable
///
/// # Example
///
/// ```rust,ignore
/// let format: Option<Format> = get_env_parse("ERROR_TRACE_FORMAT")?;
/// ```
pub fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
{
    match get_env(key)? {
        Some(val) => {
            let parsed = val.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: val.clone(),
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Load a boolean environment variable
///
/// Recognizes: "true", "1", "yes", "on" (case-insensitive) as true
/// Recognizes: "false", "0", "no", "off" (case-insensitive) as false
pub fn get_env_bool(key: &str) -> Result<Option<bool>> {
    match get_env(key)? {
        Some(val) => {
            let result = match val.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: val,
                    })
                }
            };
            Ok(Some(result))
        }
        None => Ok(None),
    }
}

/// Build a prefixed environment variable name
///
/// ```rust
/// use error_trace::config::build_env_key;
///
/// assert_eq!(build_env_key("ERROR_TRACE_", "format"), "ERROR_TRACE_FORMAT");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
