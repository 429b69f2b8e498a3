//! The error value and chain inspection
//!
//! [`Error`] is what callers pass around: either a chain node ([`Trace`]) or
//! an opaque error produced elsewhere. Any `std::error::Error` converts into
//! it, so `?` works on foreign results:
//!
//! ```rust
//! use error_trace::Error;
//!
//! fn port(raw: &str) -> Result<u16, Error> {
//!     Ok(raw.parse::<u16>()?)
//! }
//!
//! assert!(port("http").is_err());
//! ```
//!
//! Opaque errors are leaves: their own text is used when a chain is rendered
//! and they are never inspected further.

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error as ThisError;

use crate::code::{ErrorCode, NO_CODE};
use crate::format::Format;
use crate::trace::Trace;

/// Boxed foreign error
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A chain node or a foreign error
pub enum Error {
    /// A node built by this crate
    Trace(Box<Trace>),
    /// Any other error, treated as the end of the chain
    Opaque(BoxError),
}

/// Plain text error, the result of [`get_message`] and [`root_cause`]
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// Create a message error
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The message text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Error {
    /// Wrap an already boxed error
    ///
    /// A boxed [`Trace`] becomes the [`Error::Trace`] variant again.
    pub fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<Trace>() {
            Ok(trace) => Error::Trace(trace),
            Err(err) => Error::Opaque(err),
        }
    }

    /// The chain node, if this is one
    pub fn as_trace(&self) -> Option<&Trace> {
        match self {
            Error::Trace(trace) => Some(&**trace),
            Error::Opaque(_) => None,
        }
    }

    /// Whether this is a chain node
    pub fn is_trace(&self) -> bool {
        matches!(self, Error::Trace(_))
    }

    /// Code of the error, [`NO_CODE`] for foreign errors
    pub fn code(&self) -> ErrorCode {
        get_code(self)
    }

    /// Suggested process exit status, see [`ErrorCode::exit_code`]
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    /// View as a standard error, e.g. to walk `source()`
    pub fn as_std(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            Error::Trace(trace) => &**trace as &(dyn StdError + Send + Sync + 'static),
            Error::Opaque(err) => &**err,
        }
    }

    /// Render in an explicit format, ignoring the process-wide default
    ///
    /// Foreign errors render as their own `Display` text in either format.
    ///
    /// ```rust
    /// use error_trace::{new_error, propagate, Error, Format};
    ///
    /// let err = propagate(Some(new_error("no route")), "dialing").unwrap();
    /// assert_eq!(err.render(Format::Brief), "dialing: no route");
    ///
    /// let err = Error::from(std::io::Error::other("reset"));
    /// assert_eq!(err.render(Format::Full), "reset");
    /// ```
    pub fn render(&self, format: Format) -> String {
        match self {
            Error::Trace(trace) => trace.render(format),
            Error::Opaque(err) => err.to_string(),
        }
    }

    /// Downcast the error itself (not its causes) to a concrete type
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        match self {
            Error::Trace(trace) => (&**trace as &dyn Any).downcast_ref::<T>(),
            Error::Opaque(err) => err.downcast_ref::<T>(),
        }
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Error::from_boxed(Box::new(err))
    }
}

impl From<Error> for BoxError {
    fn from(err: Error) -> Self {
        match err {
            Error::Trace(trace) => trace as BoxError,
            Error::Opaque(err) => err,
        }
    }
}

/// Error code attached to `err`
///
/// Returns [`NO_CODE`] for foreign errors or nodes without a code.
///
/// ```rust
/// use error_trace::{get_code, new_error_with_code, propagate, ErrorCode};
///
/// const TIMEOUT: ErrorCode = ErrorCode::new(2);
///
/// let err = propagate(Some(new_error_with_code(TIMEOUT, "no reply")), "ping").unwrap();
/// assert_eq!(get_code(&err), TIMEOUT);
/// ```
pub fn get_code(err: &Error) -> ErrorCode {
    match err {
        Error::Trace(trace) => trace.code(),
        Error::Opaque(_) => NO_CODE,
    }
}

/// The cause of a chain node, or the foreign error itself
pub fn get_cause(err: &Error) -> Option<&Error> {
    match err {
        // Not `trace.cause()`: on `&Box<Trace>` that picks `StdError::cause`.
        Error::Trace(trace) => Trace::cause(trace),
        Error::Opaque(_) => Some(err),
    }
}

/// Just the top node's message as a plain error
///
/// Foreign errors are returned unchanged.
pub fn get_message(err: Error) -> Error {
    match err {
        Error::Trace(trace) => {
            let (message, _) = (*trace).into_parts();
            Error::Opaque(Box::new(Message(message)))
        }
        opaque @ Error::Opaque(_) => opaque,
    }
}

/// The error that started the chain
///
/// A chain of nodes yields a plain error with the root node's message; a
/// chain ending in a foreign error yields that error, unchanged.
///
/// ```rust
/// use std::num::ParseIntError;
/// use error_trace::{propagate, root_cause, Error};
///
/// let parsed = "x".parse::<u16>().err();
/// let err = propagate(parsed, "reading port").unwrap();
///
/// let root = root_cause(err);
/// assert!(root.downcast_ref::<ParseIntError>().is_some());
/// ```
pub fn root_cause(err: Error) -> Error {
    let mut curr = err;
    loop {
        match curr {
            Error::Trace(trace) => match (*trace).into_parts() {
                (_, Some(cause)) => curr = cause,
                (message, None) => return Error::Opaque(Box::new(Message(message))),
            },
            opaque @ Error::Opaque(_) => return opaque,
        }
    }
}
