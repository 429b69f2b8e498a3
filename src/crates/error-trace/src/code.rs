//! Error codes
//!
//! An [`ErrorCode`] is a small classification value attached to a chain as it
//! is propagated up the stack. There is no predefined set of codes; each
//! application defines the ones relevant to it:
//!
//! ```rust
//! use error_trace::ErrorCode;
//!
//! const MANIFEST_NOT_FOUND: ErrorCode = ErrorCode::new(0);
//! const BAD_INPUT: ErrorCode = ErrorCode::new(1);
//! const TIMEOUT: ErrorCode = ErrorCode::new(2);
//! # let _ = (MANIFEST_NOT_FOUND, BAD_INPUT, TIMEOUT);
//! ```
//!
//! The one reserved value is [`NO_CODE`] (`u16::MAX`). Avoid using it as an
//! application code.

use std::fmt;

/// Classification code carried by a chain node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(u16);

/// Code of errors with no code explicitly attached
pub const NO_CODE: ErrorCode = ErrorCode(u16::MAX);

impl ErrorCode {
    /// Create a code from its numeric value
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Numeric value of the code
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this is the [`NO_CODE`] sentinel
    pub const fn is_none(self) -> bool {
        self.0 == NO_CODE.0
    }

    /// Suggested process exit status for an error carrying this code
    ///
    /// `1` when no code is attached, otherwise the code's value. CLIs use this
    /// to tell specific failure classes apart.
    ///
    /// ```rust
    /// use error_trace::{ErrorCode, NO_CODE};
    ///
    /// assert_eq!(NO_CODE.exit_code(), 1);
    /// assert_eq!(ErrorCode::new(42).exit_code(), 42);
    /// ```
    pub const fn exit_code(self) -> i32 {
        if self.is_none() {
            1
        } else {
            self.0 as i32
        }
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        NO_CODE
    }
}

impl From<u16> for ErrorCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.pad("none")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}
