//! Call-site locations
//!
//! Locations come from `#[track_caller]`: every public constructor is marked
//! with it, so [`std::panic::Location::caller`] inside the builder resolves to
//! the user's call site. Function names are only known to the macro
//! constructors, which record the path of the enclosing function.

use std::fmt;
use std::panic;

use crate::settings;

/// Source position recorded on a chain node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Source file, after the active path cleaner was applied
    pub file: String,
    /// Line number
    pub line: u32,
    /// Short function name (`name` or `Receiver.name`), empty if unknown
    pub function: String,
}

impl Location {
    /// Create a location from explicit parts
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if !self.function.is_empty() {
            write!(f, " ({})", self.function)?;
        }
        Ok(())
    }
}

/// Turn a caller position into a [`Location`]
///
/// Returns `None` when location capture is switched off. `function` is the
/// full path of the calling function, if known.
pub(crate) fn capture(caller: &panic::Location<'_>, function: Option<&str>) -> Option<Location> {
    if !settings::capture_locations() {
        return None;
    }

    Some(Location {
        file: settings::clean(caller.file()),
        line: caller.line(),
        function: function.map(short_function_name).unwrap_or_default(),
    })
}

/// Shorten a function path to `name` or `Receiver.name`
///
/// Module paths, generic arguments, closure segments and `<T as Trait>`
/// qualification are dropped:
///
/// ```rust
/// use error_trace::location::short_function_name;
///
/// assert_eq!(short_function_name("app::manifest::load"), "load");
/// assert_eq!(short_function_name("app::manifest::Loader::load"), "Loader.load");
/// assert_eq!(short_function_name("<app::Loader<T> as app::Source>::fetch"), "Loader.fetch");
/// assert_eq!(short_function_name("app::run::{{closure}}"), "run");
/// ```
pub fn short_function_name(path: &str) -> String {
    let segments: Vec<&str> = split_top_level(path)
        .into_iter()
        .filter(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .collect();

    let Some((name, rest)) = segments.split_last() else {
        return String::new();
    };
    let name = strip_generics(name);

    match rest.last().and_then(|segment| receiver_name(segment)) {
        Some(receiver) => format!("{}.{}", receiver, name),
        None => name.to_string(),
    }
}

fn receiver_name(segment: &str) -> Option<&str> {
    if let Some(qualified) = segment.strip_prefix('<') {
        // `<Type as Trait>` or `<Type>`
        let inner = qualified.strip_suffix('>').unwrap_or(qualified);
        let self_ty = inner.split(" as ").next().unwrap_or(inner);
        let self_ty = self_ty
            .trim_start_matches('&')
            .trim_start_matches("mut ")
            .trim_start_matches("dyn ");
        let last = split_top_level(self_ty).pop().unwrap_or(self_ty);
        let last = strip_generics(last);
        return (!last.is_empty()).then_some(last);
    }

    let name = strip_generics(segment);
    name.chars()
        .next()
        .filter(|c| c.is_uppercase())
        .map(|_| name)
}

fn strip_generics(segment: &str) -> &str {
    match segment.find('<') {
        Some(idx) => &segment[..idx],
        None => segment,
    }
}

/// Split on `::` outside of angle brackets
fn split_top_level(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}
