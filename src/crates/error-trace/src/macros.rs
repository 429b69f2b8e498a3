//! `format!`-style constructors
//!
//! The macros interpolate their arguments once, when the node is built, and
//! also record the name of the enclosing function, which the plain function
//! constructors cannot see.

/// Path of the enclosing function
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Create a root error, a drop-in replacement for `format!` based errors
///
/// ```rust
/// use error_trace::{new_error, Format};
///
/// fn check(port: u16) -> Result<(), error_trace::Error> {
///     if port == 0 {
///         return Err(new_error!("expected {} to be a valid port", port));
///     }
///     Ok(())
/// }
///
/// let err = check(0).unwrap_err();
/// let trace = err.as_trace().unwrap();
/// assert_eq!(trace.render(Format::Brief), "expected 0 to be a valid port");
/// assert_eq!(trace.location().unwrap().function, "check");
/// ```
#[macro_export]
macro_rules! new_error {
    ($($arg:tt)+) => {
        $crate::__private::create(
            ::core::option::Option::None,
            $crate::NO_CODE,
            ::std::format!($($arg)+),
            ::core::option::Option::Some($crate::__function_path!()),
        )
    };
}

/// Like [`new_error!`], with a code attached
#[macro_export]
macro_rules! new_error_with_code {
    ($code:expr, $($arg:tt)+) => {
        $crate::__private::create(
            ::core::option::Option::None,
            $code,
            ::std::format!($($arg)+),
            ::core::option::Option::Some($crate::__function_path!()),
        )
    };
}

/// A coded error without a location, see [`new_message_with_code`](crate::new_message_with_code)
#[macro_export]
macro_rules! new_message_with_code {
    ($code:expr, $($arg:tt)+) => {
        $crate::new_message_with_code($code, ::std::format!($($arg)+))
    };
}

/// Wrap an `Option` of an error, see [`propagate`](crate::propagate)
///
/// Format arguments are only evaluated when there is a cause to wrap.
///
/// ```rust
/// use error_trace::{propagate, Format};
///
/// fn load(path: &str) -> Result<String, error_trace::Error> {
///     std::fs::read_to_string(path)
///         .map_err(|err| propagate!(Some(err), "failed to load {}", path).unwrap())
/// }
///
/// let err = load("/no/such/manifest.toml").unwrap_err();
/// let brief = err.render(Format::Brief);
/// assert!(brief.starts_with("failed to load /no/such/manifest.toml: "));
/// ```
#[macro_export]
macro_rules! propagate {
    ($cause:expr, $($arg:tt)+) => {
        match $cause {
            ::core::option::Option::Some(cause) => ::core::option::Option::Some(
                $crate::__private::create(
                    ::core::option::Option::Some($crate::Error::from(cause)),
                    $crate::NO_CODE,
                    ::std::format!($($arg)+),
                    ::core::option::Option::Some($crate::__function_path!()),
                ),
            ),
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}

/// Like [`propagate!`], attaching a code instead of inheriting one
#[macro_export]
macro_rules! propagate_with_code {
    ($cause:expr, $code:expr, $($arg:tt)+) => {
        match $cause {
            ::core::option::Option::Some(cause) => ::core::option::Option::Some(
                $crate::__private::create(
                    ::core::option::Option::Some($crate::Error::from(cause)),
                    $code,
                    ::std::format!($($arg)+),
                    ::core::option::Option::Some($crate::__function_path!()),
                ),
            ),
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}
