//! # Base Error Capability
//!
//! Defines the contract every reportable error in the workspace satisfies:
//! a message, an optional wrapped cause, and an optional capture site.
//! [`NullReferenceError`](crate::null_reference::NullReferenceError) is one
//! implementation; the reporter in [`crate::report`] only depends on this
//! trait.

use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::panic::Location;

/// Source position at which an error value was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CaptureSite {
    /// Source file, as reported by the compiler.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl CaptureSite {
    /// Capture the location of the caller.
    ///
    /// Inside a `#[track_caller]` chain this resolves to the outermost
    /// untracked call.
    #[track_caller]
    pub fn here() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CaptureSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for CaptureSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Generic error capability: message, optional cause, optional capture site.
///
/// Implementors are plain error values. They must be shareable across
/// threads so they can cross task boundaries inside `Result`s.
pub trait BaseError: Error + Send + Sync + 'static {
    /// Message text, returned unchanged.
    fn message(&self) -> &str;

    /// Short diagnostic name of the concrete error kind.
    fn type_name(&self) -> &'static str;

    /// Wrapped cause, if any. Defaults to [`Error::source`].
    fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.source()
    }

    /// Where the error value was constructed, if recorded.
    fn capture_site(&self) -> Option<CaptureSite> {
        None
    }

    /// One-line diagnostic: `"<type_name>: <message>"`.
    ///
    /// An empty message yields the type name alone.
    fn diagnostic(&self) -> String {
        let message = self.message();
        if message.is_empty() {
            self.type_name().to_string()
        } else {
            format!("{}: {}", self.type_name(), message)
        }
    }
}
