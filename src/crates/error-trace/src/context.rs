//! Propagation helpers for `Result`
//!
//! [`ResultExt`] wraps the error of a `Result` the same way
//! [`propagate`](crate::propagate) wraps an `Option`, recording the caller's
//! location.

use crate::code::{ErrorCode, NO_CODE};
use crate::error::Error;
use crate::trace::create;

/// Trait for adding context to failed results
///
/// # Example
///
/// ```rust
/// use error_trace::{ErrorCode, Format, ResultExt};
///
/// const NOT_FOUND: ErrorCode = ErrorCode::new(3);
///
/// fn read_config(path: &str) -> Result<String, error_trace::Error> {
///     std::fs::read_to_string(path).propagate_with_code(NOT_FOUND, format!("reading {}", path))
/// }
///
/// let err = read_config("/no/such/file").unwrap_err();
/// assert_eq!(err.exit_code(), 3);
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with a message
    fn propagate(self, message: impl Into<String>) -> Result<T, Error>;

    /// Wrap the error with a message and an explicit code
    fn propagate_with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, Error>;

    /// Wrap the error with a lazily built message
    ///
    /// Useful when the message is expensive to compute and should only be
    /// created if an error actually occurs.
    fn with_propagate<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn propagate(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(create(Some(err.into()), NO_CODE, message.into(), None)),
        }
    }

    #[track_caller]
    fn propagate_with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(create(Some(err.into()), code, message.into(), None)),
        }
    }

    #[track_caller]
    fn with_propagate<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(create(Some(err.into()), NO_CODE, f(), None)),
        }
    }
}
