//! Diagnostic reporting for errors that reach the top of a unit of work.
//!
//! [`Report`] renders any [`BaseError`] as operator-facing text:
//!
//! ```text
//! NullReferenceError: ptr was null
//!     at src/main.rs:42:17
//! Caused by: connection reset
//! ```
//!
//! [`log_unhandled`] sends the same text through `tracing` at ERROR level.
//! Terminating the affected unit of work is left to the caller.

use crate::base::{BaseError, CaptureSite};
use crate::consts::DEFAULT_MAX_CAUSE_DEPTH;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use tracing::error;

/// What a report includes beyond the headline.
///
/// # TOML Example
///
/// ```toml
/// [report]
/// include_site = true
/// include_causes = true
/// max_cause_depth = 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// Print the capture site under the headline.
    pub include_site: bool,
    /// Print the `source()` chain.
    pub include_causes: bool,
    /// Causes printed before the rest are summarized.
    pub max_cause_depth: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_site: true,
            include_causes: true,
            max_cause_depth: DEFAULT_MAX_CAUSE_DEPTH,
        }
    }
}

/// Display adapter rendering an error with its site and causes.
pub struct Report<'a> {
    error: &'a dyn BaseError,
    options: &'a ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(error: &'a dyn BaseError, options: &'a ReportOptions) -> Self {
        Self { error, options }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error.diagnostic())?;

        if self.options.include_site {
            if let Some(site) = self.error.capture_site() {
                write!(f, "\n    at {site}")?;
            }
        }

        if self.options.include_causes {
            let mut next = BaseError::cause(self.error);
            let mut depth = 0;
            while let Some(cause) = next {
                if depth == self.options.max_cause_depth {
                    let remaining = chain_len(Some(cause));
                    write!(f, "\n    ... {remaining} more")?;
                    break;
                }
                write!(f, "\nCaused by: {cause}")?;
                next = cause.source();
                depth += 1;
            }
        }

        Ok(())
    }
}

fn chain_len(mut next: Option<&(dyn Error + 'static)>) -> usize {
    let mut n = 0;
    while let Some(e) = next {
        n += 1;
        next = e.source();
    }
    n
}

/// Flat, serializable view of a reported error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSnapshot {
    pub error_type: &'static str,
    pub message: String,
    pub site: Option<CaptureSite>,
    pub causes: Vec<String>,
}

impl ErrorSnapshot {
    /// Capture `error`, keeping at most `options.max_cause_depth` causes.
    ///
    /// `include_site` and `include_causes` are honored the same way
    /// [`Report`] honors them.
    pub fn capture(error: &dyn BaseError, options: &ReportOptions) -> Self {
        let mut causes = Vec::new();
        if options.include_causes {
            let mut next = BaseError::cause(error);
            while let Some(cause) = next {
                if causes.len() == options.max_cause_depth {
                    break;
                }
                causes.push(cause.to_string());
                next = cause.source();
            }
        }

        Self {
            error_type: error.type_name(),
            message: error.message().to_string(),
            site: error.capture_site().filter(|_| options.include_site),
            causes,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Log `error` as unhandled at ERROR level.
pub fn log_unhandled(error: &dyn BaseError, options: &ReportOptions) {
    let report = Report::new(error, options);
    match error.capture_site() {
        Some(site) => error!(error_type = error.type_name(), %site, "unhandled: {report}"),
        None => error!(error_type = error.type_name(), "unhandled: {report}"),
    }
}
