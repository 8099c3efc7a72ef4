//! Null checks that raise [`NullReferenceError`].
//!
//! In Rust a "null reference" is either an `Option` that is `None` where a
//! value is required, or a null raw pointer handed across an FFI-style
//! boundary. Every helper here is `#[track_caller]`, so the capture site
//! of the raised error is the code that performed the check.

use crate::null_reference::NullReferenceError;
use std::borrow::Cow;
use std::ptr::NonNull;
use tracing::debug;

/// Unwrap `value`, or raise with the default message.
#[track_caller]
pub fn require_non_null<T>(value: Option<T>) -> Result<T, NullReferenceError> {
    match value {
        Some(v) => Ok(v),
        None => Err(raised(NullReferenceError::new())),
    }
}

/// Unwrap `value`, or raise with `message`.
#[track_caller]
pub fn require_non_null_msg<T>(
    value: Option<T>,
    message: impl Into<Cow<'static, str>>,
) -> Result<T, NullReferenceError> {
    match value {
        Some(v) => Ok(v),
        None => Err(raised(NullReferenceError::with_message(message))),
    }
}

/// Convert a raw pointer to [`NonNull`], or raise with the default message.
///
/// Only the null check is performed; the pointer is not dereferenced.
#[track_caller]
pub fn require_non_null_ptr<T>(ptr: *mut T) -> Result<NonNull<T>, NullReferenceError> {
    match NonNull::new(ptr) {
        Some(p) => Ok(p),
        None => Err(raised(NullReferenceError::new())),
    }
}

/// Extension methods on `Option` for raising null-reference errors.
///
/// ```rust
/// use nullref_common::check::NullCheck;
///
/// let name: Option<&str> = None;
/// let err = name.or_null_ref_with("name was null").unwrap_err();
/// assert_eq!(err.message(), "name was null");
/// ```
pub trait NullCheck<T> {
    /// `Some(v)` → `Ok(v)`; `None` → error with the default message.
    fn or_null_ref(self) -> Result<T, NullReferenceError>;

    /// `Some(v)` → `Ok(v)`; `None` → error with `message`.
    fn or_null_ref_with(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, NullReferenceError>;
}

impl<T> NullCheck<T> for Option<T> {
    #[track_caller]
    fn or_null_ref(self) -> Result<T, NullReferenceError> {
        require_non_null(self)
    }

    #[track_caller]
    fn or_null_ref_with(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, NullReferenceError> {
        require_non_null_msg(self, message)
    }
}

fn raised(err: NullReferenceError) -> NullReferenceError {
    match err.site() {
        Some(site) => debug!(%site, "null reference raised"),
        None => debug!("null reference raised"),
    }
    err
}
