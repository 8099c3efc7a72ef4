//! Null-reference error type.
//!
//! Raised when an operation required a present reference but received a
//! null, absent or uninitialized one. There is exactly one kind; the
//! message is the only payload that distinguishes two instances.
//!
//! Instances are immutable once built. [`NullReferenceError::with_cause`]
//! consumes the value and returns a new one, so nothing can change the
//! message of an error that has already been handed out.

use crate::base::{BaseError, CaptureSite};
use crate::consts::{DEFAULT_MESSAGE, NULL_REFERENCE_TYPE_NAME};
use static_assertions::assert_impl_all;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A null reference was used where an object was required.
///
/// `Display` prints the message verbatim; use
/// [`BaseError::diagnostic`] or [`crate::report::Report`] for the
/// `"NullReferenceError: ..."` form.
#[derive(Debug, Clone)]
pub struct NullReferenceError {
    message: Cow<'static, str>,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    site: Option<CaptureSite>,
}

assert_impl_all!(NullReferenceError: Send, Sync, Clone, StdError, BaseError);

impl NullReferenceError {
    /// Error carrying [`DEFAULT_MESSAGE`], with the caller as capture site.
    #[track_caller]
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_MESSAGE),
            cause: None,
            site: Some(CaptureSite::here()),
        }
    }

    /// Error carrying `message` exactly as given (empty strings included).
    #[track_caller]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            site: Some(CaptureSite::here()),
        }
    }

    /// Error raised on behalf of the runtime rather than by user code.
    ///
    /// Carries the default message and no capture site.
    pub fn synthesized() -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_MESSAGE),
            cause: None,
            site: None,
        }
    }

    /// Attach the error that led to this one.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// The stored message, unchanged.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where this value was constructed. `None` for synthesized errors.
    #[inline]
    pub fn site(&self) -> Option<CaptureSite> {
        self.site
    }

    /// True if the message is [`DEFAULT_MESSAGE`].
    pub fn has_default_message(&self) -> bool {
        self.message == DEFAULT_MESSAGE
    }
}

impl Default for NullReferenceError {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for NullReferenceError {
    #[track_caller]
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&'static str> for NullReferenceError {
    #[track_caller]
    fn from(message: &'static str) -> Self {
        Self::with_message(message)
    }
}

impl fmt::Display for NullReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Forwards to the wrapped error, not the `Arc` holding it.
impl StdError for NullReferenceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

// Equality is on the message only; capture site and cause are diagnostics.
impl PartialEq for NullReferenceError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for NullReferenceError {}

impl BaseError for NullReferenceError {
    fn message(&self) -> &str {
        &self.message
    }

    fn type_name(&self) -> &'static str {
        NULL_REFERENCE_TYPE_NAME
    }

    fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.source()
    }

    fn capture_site(&self) -> Option<CaptureSite> {
        self.site
    }
}
