//! NullReferenceError contract tests.
//!
//! Message round-trip for arbitrary text, the exact default literal,
//! base-capability conformance, and value vs. identity equality.

use nullref_common::prelude::*;
use proptest::prelude::*;
use std::error::Error;

/// The default literal, spelled out independently of `DEFAULT_MESSAGE`.
const EXPECTED_DEFAULT: &str = "哇哦！这个笨蛋！怎么就空指针了呢？\n真是够呆啊。连个合法的指针都搞不定~ 简直就是蠢到爆炸了！！赶紧检查下你的代码吧~ 别再犯这种低级错误了~ 哼~";

#[test]
fn default_message_is_exact_literal() {
    let err = NullReferenceError::new();
    assert_eq!(err.message(), EXPECTED_DEFAULT);
    assert_eq!(DEFAULT_MESSAGE, EXPECTED_DEFAULT);
    assert!(err.message().starts_with('哇'));
    assert!(err.message().contains("？\n真是"));
}

#[test]
fn custom_messages_round_trip_exactly() {
    let samples = [
        "",
        "ptr was null",
        " leading and trailing ",
        "first\nsecond\n",
        "\u{0}embedded nul",
        "ヌルポ",
        "😀 emoji",
        EXPECTED_DEFAULT,
    ];
    for s in samples {
        assert_eq!(NullReferenceError::with_message(s).message(), s);
        assert_eq!(NullReferenceError::with_message(s.to_owned()).message(), s);
    }
}

proptest! {
    #[test]
    fn any_message_round_trips(s in any::<String>()) {
        let err = NullReferenceError::with_message(s.clone());
        prop_assert_eq!(err.message(), s.as_str());
        prop_assert_eq!(err.to_string(), s.clone());
        prop_assert_eq!(err, NullReferenceError::with_message(s));
    }
}

#[test]
fn long_message_round_trips() {
    let long = "x".repeat(64 * 1024);
    let err = NullReferenceError::with_message(long.clone());
    assert_eq!(err.message(), long);
}

#[test]
fn scenario_empty_message() {
    assert_eq!(NullReferenceError::with_message("").message(), "");
}

#[test]
fn scenario_ptr_was_null() {
    assert_eq!(
        NullReferenceError::with_message("ptr was null").message(),
        "ptr was null"
    );
}

#[test]
fn scenario_distinct_instances_equal_messages() {
    let a = NullReferenceError::with_message("same");
    let b = NullReferenceError::with_message("same");
    assert!(!std::ptr::eq(&a, &b));
    assert_eq!(a.message(), b.message());
    assert_eq!(a, b);
}

#[test]
fn both_constructors_satisfy_base_capability() {
    fn check(e: &dyn BaseError) {
        assert_eq!(e.type_name(), "NullReferenceError");
        assert_eq!(e.to_string(), e.message());
    }
    check(&NullReferenceError::new());
    check(&NullReferenceError::with_message("m"));
    check(&NullReferenceError::synthesized());
}

#[test]
fn converts_into_boxed_error() {
    fn fails() -> Result<(), Box<dyn Error + Send + Sync>> {
        let missing: Option<u8> = None;
        missing.or_null_ref_with("missing value")?;
        Ok(())
    }
    let err = fails().unwrap_err();
    let nre = err.downcast_ref::<NullReferenceError>().unwrap();
    assert_eq!(nre.message(), "missing value");
}

#[test]
fn message_stable_across_threads() {
    let err = NullReferenceError::new();
    let handle = std::thread::spawn(move || err);
    let back = handle.join().unwrap();
    assert_eq!(back.message(), EXPECTED_DEFAULT);
}
