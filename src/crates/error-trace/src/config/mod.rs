//! Configuration management
//!
//! [`TraceConfig`] gathers the process-wide settings so they can be loaded
//! from the environment (or deserialized from an application's own config
//! file) and applied in one step at startup:
//!
//! | variable                          | values            | default |
//! |-----------------------------------|-------------------|---------|
//! | `ERROR_TRACE_FORMAT`              | `full`, `brief`   | `full`  |
//! | `ERROR_TRACE_CAPTURE_LOCATIONS`   | boolean           | `true`  |
//! | `ERROR_TRACE_CLEAN_PATHS`         | boolean           | `true`  |
//!
//! # Example
//!
//! ```rust,ignore
//! use error_trace::config::TraceConfig;
//!
//! TraceConfig::from_env("MYAPP_")?.apply();
//! ```

mod env;

pub use env::{build_env_key, get_env, get_env_bool, get_env_parse};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::format::Format;
use crate::settings;

/// Prefix of the environment variables read by [`crate::init`]
pub const DEFAULT_ENV_PREFIX: &str = "ERROR_TRACE_";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but not valid UTF-8
    #[error("Environment variable {0} contains invalid UTF-8")]
    NotUnicode(String),

    /// Variable is set to something that cannot be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Process-wide settings as one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Format used by `Display` without flags
    pub default_format: Format,
    /// Record call-site locations
    pub capture_locations: bool,
    /// Apply the default path cleaner to recorded files
    pub clean_paths: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            default_format: Format::Full,
            capture_locations: true,
            clean_paths: true,
        }
    }
}

impl TraceConfig {
    /// Create a configuration holding the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default format
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    /// Enable or disable call-site capture
    pub fn with_capture_locations(mut self, enabled: bool) -> Self {
        self.capture_locations = enabled;
        self
    }

    /// Enable or disable path cleaning
    pub fn with_clean_paths(mut self, enabled: bool) -> Self {
        self.clean_paths = enabled;
        self
    }

    /// Load from `{prefix}FORMAT`, `{prefix}CAPTURE_LOCATIONS` and
    /// `{prefix}CLEAN_PATHS`, keeping defaults for unset variables
    pub fn from_env(prefix: &str) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            default_format: get_env_parse(&build_env_key(prefix, "format"))?
                .unwrap_or(defaults.default_format),
            capture_locations: get_env_bool(&build_env_key(prefix, "capture_locations"))?
                .unwrap_or(defaults.capture_locations),
            clean_paths: get_env_bool(&build_env_key(prefix, "clean_paths"))?
                .unwrap_or(defaults.clean_paths),
        })
    }

    /// Write the configuration into the process-wide settings
    ///
    /// Enabling `clean_paths` installs the default cleaner, replacing any
    /// custom one.
    pub fn apply(&self) {
        debug!(
            default_format = %self.default_format,
            capture_locations = self.capture_locations,
            clean_paths = self.clean_paths,
            "Applying trace configuration"
        );

        settings::set_default_format(self.default_format);
        settings::set_capture_locations(self.capture_locations);
        if self.clean_paths {
            settings::reset_clean_path();
        } else {
            settings::disable_clean_path();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TraceConfig::default();
        assert_eq!(config.default_format, Format::Full);
        assert!(config.capture_locations);
        assert!(config.clean_paths);
    }

    #[test]
    fn test_config_builder() {
        let config = TraceConfig::new()
            .with_default_format(Format::Brief)
            .with_capture_locations(false)
            .with_clean_paths(false);

        assert_eq!(config.default_format, Format::Brief);
        assert!(!config.capture_locations);
        assert!(!config.clean_paths);
    }

    #[test]
    fn test_from_env_defaults() {
        let config = TraceConfig::from_env("ERROR_TRACE_TEST_UNSET_").unwrap();
        assert_eq!(config, TraceConfig::default());
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("ERROR_TRACE_TEST_ENV_FORMAT", "Brief");
        std::env::set_var("ERROR_TRACE_TEST_ENV_CAPTURE_LOCATIONS", "off");

        let config = TraceConfig::from_env("ERROR_TRACE_TEST_ENV_").unwrap();
        assert_eq!(config.default_format, Format::Brief);
        assert!(!config.capture_locations);
        assert!(config.clean_paths);

        std::env::remove_var("ERROR_TRACE_TEST_ENV_FORMAT");
        std::env::remove_var("ERROR_TRACE_TEST_ENV_CAPTURE_LOCATIONS");
    }

    #[test]
    fn test_from_env_invalid() {
        std::env::set_var("ERROR_TRACE_TEST_BAD_FORMAT", "loud");
        let err = TraceConfig::from_env("ERROR_TRACE_TEST_BAD_").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for ERROR_TRACE_TEST_BAD_FORMAT: loud"
        );
        std::env::remove_var("ERROR_TRACE_TEST_BAD_FORMAT");
    }

    #[test]
    fn test_apply() {
        let _guard = settings::TEST_LOCK.lock();

        TraceConfig::new()
            .with_default_format(Format::Brief)
            .with_capture_locations(false)
            .with_clean_paths(false)
            .apply();

        assert_eq!(settings::default_format(), Format::Brief);
        assert!(!settings::capture_locations());
        assert_eq!(
            settings::clean("/home/dev/.cargo/registry/src/idx/foo-1.0.0/src/lib.rs"),
            "/home/dev/.cargo/registry/src/idx/foo-1.0.0/src/lib.rs"
        );

        TraceConfig::default().apply();
        assert_eq!(settings::default_format(), Format::Full);
        assert_eq!(
            settings::clean("/home/dev/.cargo/registry/src/idx/foo-1.0.0/src/lib.rs"),
            "foo-1.0.0/src/lib.rs"
        );

        settings::reset();
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TraceConfig = serde_json::from_str(r#"{"default_format": "brief"}"#).unwrap();
        assert_eq!(config.default_format, Format::Brief);
        assert!(config.capture_locations);
    }
}
