// Tests for building, inspecting and rendering error chains through the public API

use std::io;

use error_trace::{
    get_cause, get_code, new_error, new_error_with_code, new_message_with_code, propagate,
    propagate_with_code, root_cause, settings, Error, ErrorCode, Format, Location, ResultExt,
    Trace, NO_CODE,
};
use parking_lot::Mutex;
use proptest::prelude::*;

static SETTINGS_LOCK: Mutex<()> = parking_lot::const_mutex(());

fn proptest_config() -> ProptestConfig {
    if std::env::var_os("PROPTEST_CASES").is_some() {
        ProptestConfig::default()
    } else {
        ProptestConfig::with_cases(64)
    }
}

/// Build a chain from root to head, `codes[0]` being the root's code
fn chain_with_codes(codes: &[Option<u16>]) -> Error {
    let (root, rest) = codes.split_first().expect("at least one node");
    let mut err = match root {
        Some(code) => new_error_with_code(ErrorCode::new(*code), "root"),
        None => new_error("root"),
    };
    for code in rest {
        err = match code {
            Some(code) => propagate_with_code(Some(err), ErrorCode::new(*code), "wrap"),
            None => propagate(Some(err), "wrap"),
        }
        .expect("cause is present");
    }
    err
}

#[test]
fn test_code_inherited_from_root() {
    let e1 = new_error_with_code(ErrorCode::new(5), "root");
    let e2 = propagate(Some(e1), "wrap").unwrap();

    assert_eq!(get_code(&e2), ErrorCode::new(5));
    assert_eq!(get_code(get_cause(&e2).unwrap()), ErrorCode::new(5));
}

#[test]
fn test_code_override_does_not_touch_cause() {
    let e1 = new_error("root");
    let e2 = propagate_with_code(Some(e1), ErrorCode::new(7), "wrap").unwrap();

    assert_eq!(get_code(&e2), ErrorCode::new(7));
    assert_eq!(get_code(get_cause(&e2).unwrap()), NO_CODE);
}

#[test]
fn test_propagate_nothing() {
    assert!(propagate(None::<Error>, "msg").is_none());
    assert!(propagate_with_code(None::<io::Error>, ErrorCode::new(1), "msg").is_none());
}

#[test]
fn test_root_cause_of_pure_chain() {
    let err = chain_with_codes(&[None, Some(2), None]);
    let root = root_cause(err);
    assert!(!root.is_trace());
    assert_eq!(root.to_string(), "root");
}

#[test]
fn test_root_cause_of_foreign_chain() {
    let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = propagate(Some(err), "opening").unwrap();
    let err = propagate(Some(err), "loading").unwrap();

    let root = root_cause(err);
    let io_err = root.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
}

#[test]
fn test_exit_codes() {
    assert_eq!(new_error("x").exit_code(), 1);
    assert_eq!(new_message_with_code(ErrorCode::new(42), "x").exit_code(), 42);
    assert_eq!(Error::from(io::Error::other("x")).exit_code(), 1);
}

#[test]
fn test_brief_rendering() {
    let c = Trace::from_parts("C", None, NO_CODE, None);
    let b = Trace::from_parts("B", Some(c.into()), NO_CODE, None);
    let a = Trace::from_parts("A", Some(b.into()), NO_CODE, None);
    assert_eq!(a.render(Format::Brief), "A: B: C");

    let c = Trace::from_parts("C", None, NO_CODE, None);
    let b = Trace::from_parts("", Some(c.into()), NO_CODE, None);
    let a = Trace::from_parts("A", Some(b.into()), NO_CODE, None);
    assert_eq!(a.render(Format::Brief), "A: C");
}

#[test]
fn test_full_rendering_location_line() {
    let err = Trace::from_parts("boom", None, NO_CODE, Some(Location::new("x.go", 10, "Do")));
    let text = err.render(Format::Full);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["boom", " --- at x.go:10 (Do) ---"]);
}

#[test]
fn test_full_rendering_of_captured_chain() {
    let _guard = SETTINGS_LOCK.lock();
    settings::reset();

    let err: Result<(), io::Error> = Err(io::Error::other("connection reset"));
    let err = err.propagate("sending request").unwrap_err();
    let line = line!() - 1;

    let text = format!("{:+}", err);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "sending request");
    assert!(lines[1].starts_with(" --- at "));
    assert!(lines[1].ends_with(&format!("chain.rs:{} ---", line)));
    assert_eq!(lines[2], "Caused by: connection reset");
}

#[test]
fn test_default_format_switch() {
    let _guard = SETTINGS_LOCK.lock();
    settings::reset();
    settings::set_capture_locations(false);

    let err = propagate(Some(new_error("root")), "wrap").unwrap();
    assert_eq!(err.to_string(), "wrap\nCaused by: root");

    settings::set_default_format(Format::Brief);
    assert_eq!(err.to_string(), "wrap: root");
    assert_eq!(format!("{:+}", err), "wrap\nCaused by: root");

    settings::reset();
}

#[test]
fn test_custom_clean_path() {
    let _guard = SETTINGS_LOCK.lock();
    settings::reset();
    settings::set_clean_path(|path| {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        format!("cleaned/{}", name)
    });

    let err = new_error("boom");
    let file = &err.as_trace().unwrap().location().unwrap().file;
    assert_eq!(file, "cleaned/chain.rs");

    settings::reset();
}

#[test]
fn test_into_box_dyn_error() {
    fn fallible() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(new_message_with_code(ErrorCode::new(1), "nope").into())
    }

    let err = fallible().unwrap_err();
    let err = Error::from_boxed(err);
    assert_eq!(err.code(), ErrorCode::new(1));
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_head_code_is_first_explicit_code(
        codes in prop::collection::vec(prop::option::of(0u16..u16::MAX), 1..8)
    ) {
        let expected = codes
            .iter()
            .rev()
            .find_map(|code| *code)
            .map(ErrorCode::new)
            .unwrap_or(NO_CODE);

        let err = chain_with_codes(&codes);
        prop_assert_eq!(get_code(&err), expected);
    }

    #[test]
    fn prop_brief_joins_non_empty_messages(
        messages in prop::collection::vec("[a-z]{0,4}", 1..6)
    ) {
        let mut err: Option<Error> = None;
        for message in messages.iter().rev() {
            err = Some(Trace::from_parts(message.clone(), err, NO_CODE, None).into());
        }
        let err = err.unwrap();

        let expected = messages
            .iter()
            .filter(|message| !message.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(": ");
        prop_assert_eq!(err.render(Format::Brief), expected);
    }
}
