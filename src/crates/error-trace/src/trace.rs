//! Chain nodes and their constructors
//!
//! A [`Trace`] wraps an optional cause with a message describing what the
//! failing call was attempting, an [`ErrorCode`] and, usually, the location
//! of the call site. Nodes are built once and never modified.

use std::error::Error as StdError;
use std::panic;

use crate::code::{ErrorCode, NO_CODE};
use crate::error::{get_code, Error};
use crate::format::Format;
use crate::location::{self, Location};

/// A link in an error chain
///
/// Build one with [`new_error`], [`propagate`] and friends (or their macro
/// counterparts), which return it wrapped in an [`Error`].
pub struct Trace {
    message: String,
    cause: Option<Error>,
    code: ErrorCode,
    location: Option<Location>,
}

impl Trace {
    /// Build a node from explicit parts
    ///
    /// Applies the same inheritance rule as the constructors: a `code` of
    /// [`NO_CODE`] is replaced by the code of `cause`.
    pub fn from_parts(
        message: impl Into<String>,
        cause: Option<Error>,
        code: ErrorCode,
        location: Option<Location>,
    ) -> Self {
        let code = if code.is_none() {
            cause.as_ref().map_or(NO_CODE, get_code)
        } else {
            code
        };

        Self {
            message: message.into(),
            cause,
            code,
            location,
        }
    }

    /// What the wrapping call was attempting
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if any
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_ref()
    }

    /// Code of this node, explicit or inherited
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Where the node was created, if it was captured
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Suggested process exit status, see [`ErrorCode::exit_code`]
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Render the chain starting at this node in the given format
    pub fn render(&self, format: Format) -> String {
        format.render(self)
    }

    pub(crate) fn into_parts(self) -> (String, Option<Error>) {
        (self.message, self.cause)
    }
}

impl StdError for Trace {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_std() as &(dyn StdError + 'static))
    }
}

/// Build a node capturing the caller of the public constructor
#[doc(hidden)]
#[track_caller]
pub fn create(
    cause: Option<Error>,
    code: ErrorCode,
    message: String,
    function: Option<&str>,
) -> Error {
    let location = location::capture(panic::Location::caller(), function);
    Error::Trace(Box::new(Trace::from_parts(message, cause, code, location)))
}

/// Create a root error carrying the caller's location
///
/// Use [`new_error!`](crate::new_error!) to interpolate arguments and record
/// the calling function's name as well.
///
/// ```rust
/// use error_trace::new_error;
///
/// let err = new_error("manifest is empty");
/// assert_eq!(err.as_trace().unwrap().message(), "manifest is empty");
/// ```
#[track_caller]
pub fn new_error(message: impl Into<String>) -> Error {
    create(None, NO_CODE, message.into(), None)
}

/// Like [`new_error`], with a code attached
#[track_caller]
pub fn new_error_with_code(code: ErrorCode, message: impl Into<String>) -> Error {
    create(None, code, message.into(), None)
}

/// An error that renders like a plain message but carries a code
///
/// No location is recorded, so the full format prints only the message. The
/// code mechanism is useful on its own where a trace is not warranted.
pub fn new_message_with_code(code: ErrorCode, message: impl Into<String>) -> Error {
    Error::Trace(Box::new(Trace::from_parts(message, None, code, None)))
}

/// Wrap `cause` with a message and the caller's location
///
/// The message should describe the action that failed. If nothing useful can
/// be added beyond what `cause` already says, pass an empty message.
///
/// Returns `None` when `cause` is `None`, so results can be wrapped without
/// checking them first. The code of `cause` is inherited.
///
/// ```rust
/// use error_trace::{propagate, Error};
///
/// fn read(path: &str) -> Option<Error> {
///     let err = std::fs::read_to_string(path).err();
///     propagate(err, format!("failed to read {}", path))
/// }
///
/// assert!(read("/definitely/not/here").is_some());
/// ```
#[track_caller]
pub fn propagate<E>(cause: Option<E>, message: impl Into<String>) -> Option<Error>
where
    E: Into<Error>,
{
    let cause = cause?;
    Some(create(Some(cause.into()), NO_CODE, message.into(), None))
}

/// Like [`propagate`], attaching `code` instead of inheriting one
#[track_caller]
pub fn propagate_with_code<E>(
    cause: Option<E>,
    code: ErrorCode,
    message: impl Into<String>,
) -> Option<Error>
where
    E: Into<Error>,
{
    let cause = cause?;
    Some(create(Some(cause.into()), code, message.into(), None))
}
