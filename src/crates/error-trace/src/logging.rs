//! Logging utilities
//!
//! Report error chains through `tracing` with their code attached as fields.

use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::format::Format;

/// Log levels for [`log_error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Log an error chain
///
/// The event message is the brief, single-line rendering, with `code` and
/// `exit_code` as fields. The full trace, locations included, follows at
/// debug level.
///
/// # Example
///
/// ```rust
/// use error_trace::logging::{log_error, LogLevel};
/// use error_trace::new_error;
///
/// log_error(&new_error("connection reset"), LogLevel::Warn);
/// ```
pub fn log_error(err: &Error, level: LogLevel) {
    let code = err.code();
    let exit_code = err.exit_code();
    let summary = err.render(Format::Brief);

    match level {
        LogLevel::Debug => debug!(%code, exit_code, "{}", summary),
        LogLevel::Info => info!(%code, exit_code, "{}", summary),
        LogLevel::Warn => warn!(%code, exit_code, "{}", summary),
        LogLevel::Error => error!(%code, exit_code, "{}", summary),
    }

    if err.is_trace() {
        debug!("Full trace:\n{}", err.render(Format::Full));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_error_with_code, propagate, ErrorCode};

    #[test]
    fn test_log_error_all_levels() {
        let err = propagate(Some(new_error_with_code(ErrorCode::new(2), "root")), "wrap").unwrap();
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            log_error(&err, level);
        }
    }

    #[test]
    fn test_log_foreign_error() {
        let err = Error::from(std::io::Error::other("disk"));
        log_error(&err, LogLevel::Error);
    }
}
