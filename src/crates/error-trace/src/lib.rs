//! Error chains annotated with messages, call sites and error codes
//!
//! Wrap a failure with what the failing call was attempting, and where it was
//! made from, as it travels up the stack:
//!
//! ```rust
//! use error_trace::{new_error_with_code, Error, ErrorCode, ResultExt};
//!
//! const BAD_MANIFEST: ErrorCode = ErrorCode::new(3);
//!
//! fn parse(text: &str) -> Result<usize, Error> {
//!     if text.is_empty() {
//!         return Err(new_error_with_code!(BAD_MANIFEST, "manifest {:?} is empty", "app.toml"));
//!     }
//!     Ok(text.len())
//! }
//!
//! fn load() -> Result<usize, Error> {
//!     parse("").propagate("failed to load manifest")
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.exit_code(), 3);
//! assert_eq!(
//!     format!("{:#}", err),
//!     "failed to load manifest: manifest \"app.toml\" is empty"
//! );
//! ```
//!
//! `{}` renders the full trace (see [`format`]); `{:#}` the brief one.
//!
//! # Modules
//!
//! - `code` - Error codes and exit status mapping
//! - `error` - The `Error` value and chain inspection
//! - `format` - Full and brief rendering
//! - `location` - Call-site locations and function names
//! - `settings` - Process-wide default format, path cleaner and capture switch
//! - `cleanpath` - Path cleaning helpers
//! - `config` - Environment driven configuration
//! - `logging` - Reporting chains through `tracing`

pub mod cleanpath;
pub mod code;
pub mod config;
mod context;
pub mod error;
pub mod format;
pub mod location;
pub mod logging;
mod macros;
pub mod settings;
mod trace;

pub use code::{ErrorCode, NO_CODE};
pub use context::ResultExt;
pub use error::{get_cause, get_code, get_message, root_cause, BoxError, Error, Message};
pub use format::Format;
pub use location::Location;
pub use trace::{
    new_error, new_error_with_code, new_message_with_code, propagate, propagate_with_code, Trace,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::trace::create;
}

/// Result type whose error is an [`Error`] chain
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Load [`config::TraceConfig`] from `ERROR_TRACE_*` variables and apply it
pub fn init() -> config::Result<()> {
    let config = config::TraceConfig::from_env(config::DEFAULT_ENV_PREFIX)?;
    config.apply();
    tracing::debug!("Initialized error-trace settings");
    Ok(())
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_init() {
        let _guard = settings::TEST_LOCK.lock();
        assert!(init().is_ok());
        settings::reset();
    }
}
