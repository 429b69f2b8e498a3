//! Rendering of error chains
//!
//! Two formats exist. [`Format::Full`] prints one block per node, oldest
//! context last:
//!
//! ```text
//! failed to load manifest
//!  --- at src/manifest.rs:42 (Loader.load) ---
//! Caused by: failed to open "app.toml"
//!  --- at src/fs.rs:17 (open) ---
//! Caused by: No such file or directory (os error 2)
//! ```
//!
//! [`Format::Brief`] joins the messages on a single line:
//!
//! ```text
//! failed to load manifest: failed to open "app.toml": No such file or directory (os error 2)
//! ```
//!
//! `Display` uses the process-wide [`default_format`](crate::settings::default_format).
//! The `+` flag forces the full format and `#` forces the brief one. Width,
//! fill, alignment and precision apply to the rendered text:
//!
//! ```rust
//! use error_trace::{new_message_with_code, Error, ErrorCode, Trace, NO_CODE};
//!
//! let root = new_message_with_code(ErrorCode::new(3), "timed out");
//! let err = Error::from(Trace::from_parts("fetch", Some(root), NO_CODE, None));
//!
//! assert_eq!(format!("{:#}", err), "fetch: timed out");
//! assert_eq!(format!("{:+}", err), "fetch\nCaused by: timed out");
//! assert_eq!(format!("[{:#.5}]", err), "[fetch]");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::error::Error;
use crate::settings;
use crate::trace::Trace;

/// How a chain is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, with locations and `Caused by:` markers
    #[default]
    Full,
    /// Single line of `: `-joined messages, no locations
    Brief,
}

impl Format {
    /// Render the chain starting at `trace`
    pub fn render(self, trace: &Trace) -> String {
        match self {
            Format::Full => format_full(trace),
            Format::Brief => format_brief(trace),
        }
    }

    /// Pick the format for a `Display` request
    fn select(f: &fmt::Formatter<'_>) -> Self {
        match (f.sign_plus(), f.alternate()) {
            (true, false) => Format::Full,
            (false, true) => Format::Brief,
            _ => settings::default_format(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Full => f.pad("full"),
            Format::Brief => f.pad("brief"),
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Format::Full),
            "brief" => Ok(Format::Brief),
            _ => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Multi-line rendering, head to root
pub fn format_full(trace: &Trace) -> String {
    fn newline(out: &mut String) {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
    }

    let mut out = String::new();
    let mut curr = trace;
    loop {
        out.push_str(curr.message());

        if let Some(location) = curr.location() {
            newline(&mut out);
            if location.function.is_empty() {
                out.push_str(&format!(" --- at {}:{} ---", location.file, location.line));
            } else {
                out.push_str(&format!(
                    " --- at {}:{} ({}) ---",
                    location.file, location.line, location.function
                ));
            }
        }

        match curr.cause() {
            None => break,
            Some(Error::Opaque(cause)) => {
                newline(&mut out);
                out.push_str("Caused by: ");
                out.push_str(&cause.to_string());
                break;
            }
            Some(Error::Trace(next)) => {
                newline(&mut out);
                // The next iteration prints the message itself.
                if !next.message().is_empty() {
                    out.push_str("Caused by: ");
                }
                curr = &**next;
            }
        }
    }
    out
}

/// Single-line rendering, head to root
pub fn format_brief(trace: &Trace) -> String {
    fn concat(out: &mut String, message: &str) {
        if !out.is_empty() && !message.is_empty() {
            out.push_str(": ");
        }
        out.push_str(message);
    }

    let mut out = String::new();
    let mut curr = trace;
    loop {
        concat(&mut out, curr.message());
        match curr.cause() {
            Some(Error::Trace(next)) => curr = &**next,
            Some(Error::Opaque(cause)) => {
                concat(&mut out, &cause.to_string());
                break;
            }
            None => break,
        }
    }
    out
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(Format::select(f));
        f.pad(&text)
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Trace")
                .field("message", &self.message())
                .field("code", &self.code())
                .field("location", &self.location())
                .field("cause", &self.cause())
                .finish()
        } else {
            f.write_str(&format_full(self))
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Trace(trace) => fmt::Display::fmt(trace, f),
            Error::Opaque(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Trace(trace) => fmt::Debug::fmt(trace, f),
            Error::Opaque(err) => fmt::Debug::fmt(err, f),
        }
    }
}
