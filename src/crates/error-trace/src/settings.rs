//! Process-wide settings
//!
//! Three values are shared by every chain in the process: the default render
//! [`Format`], the path cleaner applied to captured file names, and whether
//! constructors capture call sites at all.
//!
//! Set them once at startup (directly or through [`TraceConfig`]) and only
//! read them afterwards. Readers never block each other; a writer racing with
//! readers is the caller's responsibility.
//!
//! [`TraceConfig`]: crate::config::TraceConfig

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::cleanpath;
use crate::format::Format;

/// Path cleaning function applied to captured source files
pub type CleanPathFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

struct Settings {
    default_format: Format,
    clean_path: Option<CleanPathFn>,
    capture_locations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: Format::Full,
            clean_path: Some(Arc::new(cleanpath::clean_default)),
            capture_locations: true,
        }
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Format used by `Display` when no `+` or `#` flag is given
pub fn default_format() -> Format {
    SETTINGS.read().default_format
}

/// Change the format used by `Display` when no flag is given
///
/// ```rust
/// use error_trace::{settings, Format};
///
/// settings::set_default_format(Format::Brief);
/// # settings::reset();
/// ```
pub fn set_default_format(format: Format) {
    debug!(?format, "Setting default trace format");
    SETTINGS.write().default_format = format;
}

/// Install the function applied to file paths before they are recorded
///
/// To drop an extra prefix on top of the default cleaning:
///
/// ```rust
/// use error_trace::{cleanpath, settings};
///
/// settings::set_clean_path(|path| {
///     let path = cleanpath::clean_default(path);
///     path.trim_start_matches("crates/").to_string()
/// });
/// # settings::reset();
/// ```
pub fn set_clean_path<F>(clean: F)
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    debug!("Installing custom path cleaner");
    SETTINGS.write().clean_path = Some(Arc::new(clean));
}

/// Record file paths exactly as the compiler reports them
pub fn disable_clean_path() {
    debug!("Disabling path cleaning");
    SETTINGS.write().clean_path = None;
}

/// Restore the default path cleaner
pub fn reset_clean_path() {
    SETTINGS.write().clean_path = Some(Arc::new(cleanpath::clean_default));
}

/// Apply the active path cleaner
pub fn clean(path: &str) -> String {
    // Clone out of the lock so a user cleaner never runs under it.
    let clean_path = SETTINGS.read().clean_path.clone();
    match clean_path {
        Some(clean) => clean(path),
        None => path.to_string(),
    }
}

/// Whether constructors record call-site locations
pub fn capture_locations() -> bool {
    SETTINGS.read().capture_locations
}

/// Switch call-site capture on or off
///
/// With capture off every constructor behaves like
/// [`new_message_with_code`](crate::new_message_with_code) with respect to
/// locations: the node is built, just without one.
pub fn set_capture_locations(enabled: bool) {
    debug!(enabled, "Setting call-site capture");
    SETTINGS.write().capture_locations = enabled;
}

/// Restore every setting to its default
pub fn reset() {
    *SETTINGS.write() = Settings::default();
}

/// Serializes tests that touch the process-wide settings
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let _guard = TEST_LOCK.lock();
        reset();

        assert_eq!(default_format(), Format::Full);
        assert!(capture_locations());
        assert_eq!(clean("src/main.rs"), "src/main.rs");
    }

    #[test]
    fn test_set_default_format() {
        let _guard = TEST_LOCK.lock();

        set_default_format(Format::Brief);
        assert_eq!(default_format(), Format::Brief);

        reset();
        assert_eq!(default_format(), Format::Full);
    }

    #[test]
    fn test_custom_clean_path() {
        let _guard = TEST_LOCK.lock();

        set_clean_path(|path| path.trim_start_matches("/work/").to_string());
        assert_eq!(clean("/work/src/lib.rs"), "src/lib.rs");

        disable_clean_path();
        assert_eq!(
            clean("/home/dev/.cargo/registry/src/index.crates.io-6f17d22bba15001f/foo-1.0.0/src/lib.rs"),
            "/home/dev/.cargo/registry/src/index.crates.io-6f17d22bba15001f/foo-1.0.0/src/lib.rs"
        );

        reset_clean_path();
        assert_eq!(
            clean("/home/dev/.cargo/registry/src/index.crates.io-6f17d22bba15001f/foo-1.0.0/src/lib.rs"),
            "foo-1.0.0/src/lib.rs"
        );

        reset();
    }

    #[test]
    fn test_capture_switch() {
        let _guard = TEST_LOCK.lock();

        set_capture_locations(false);
        assert!(!capture_locations());

        reset();
        assert!(capture_locations());
    }
}
