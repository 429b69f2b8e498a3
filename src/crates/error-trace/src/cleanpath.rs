//! Path cleaning helpers
//!
//! `#[track_caller]` reports workspace files relative to the workspace root
//! but dependency and standard library files with long absolute prefixes.
//! These helpers strip those prefixes so traces stay readable. The default
//! cleaner installed in [`settings`](crate::settings) is [`clean_default`].

use std::sync::LazyLock;

use regex::Regex;

/// `<cargo home>/registry/src/<index>/`
static REGISTRY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?[/\\]registry[/\\]src[/\\][^/\\]+[/\\]").unwrap());

/// `<cargo home>/git/checkouts/<repo>/<rev>/`
static GIT_CHECKOUT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?[/\\]git[/\\]checkouts[/\\][^/\\]+[/\\][^/\\]+[/\\]").unwrap());

/// `/rustc/<commit hash>/`
static RUSTC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[/\\]rustc[/\\][0-9a-f]+[/\\]").unwrap());

/// Strip the cargo registry or git checkout prefix from a dependency path
///
/// ```rust
/// use error_trace::cleanpath::remove_cargo_registry;
///
/// assert_eq!(
///     remove_cargo_registry(
///         "/home/dev/.cargo/registry/src/index.crates.io-6f17d22bba15001f/serde-1.0.200/src/de.rs"
///     ),
///     "serde-1.0.200/src/de.rs"
/// );
/// assert_eq!(remove_cargo_registry("src/main.rs"), "src/main.rs");
/// ```
pub fn remove_cargo_registry(path: &str) -> String {
    if let Some(m) = REGISTRY_PREFIX.find(path) {
        return path[m.end()..].to_string();
    }
    if let Some(m) = GIT_CHECKOUT_PREFIX.find(path) {
        return path[m.end()..].to_string();
    }
    path.to_string()
}

/// Strip the `/rustc/<hash>/` prefix from standard library paths
pub fn remove_rustc_prefix(path: &str) -> String {
    RUSTC_PREFIX.replace(path, "").into_owned()
}

/// Make `path` relative to the directory `base`
///
/// Only strips whole components; `path` is returned unchanged when it is not
/// under `base`.
///
/// ```rust
/// use error_trace::cleanpath::relative_to;
///
/// assert_eq!(relative_to("/work/app/src/main.rs", "/work/app"), "src/main.rs");
/// assert_eq!(relative_to("/work/application/main.rs", "/work/app"), "/work/application/main.rs");
/// ```
pub fn relative_to(path: &str, base: &str) -> String {
    let base = base.trim_end_matches(['/', '\\']);
    if base.is_empty() {
        return path.to_string();
    }

    match path.strip_prefix(base) {
        Some(rest) if rest.starts_with(['/', '\\']) => rest[1..].to_string(),
        _ => path.to_string(),
    }
}

/// The cleaner installed by default
pub fn clean_default(path: &str) -> String {
    remove_rustc_prefix(&remove_cargo_registry(path))
}
