//! Prelude module for common re-exports.
//!
//! `use nullref_common::prelude::*;` brings in the error type, the base
//! capability (needed for `diagnostic()` and friends), the null checks and
//! the reporter.
//!
//! # Usage
//!
//! ```rust
//! use nullref_common::prelude::*;
//!
//! let err = NullReferenceError::with_message("ptr was null");
//! assert_eq!(err.diagnostic(), "NullReferenceError: ptr was null");
//! ```

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::base::{BaseError, CaptureSite};
pub use crate::null_reference::NullReferenceError;

// ─── Null Checks ────────────────────────────────────────────────────
pub use crate::check::{NullCheck, require_non_null, require_non_null_msg, require_non_null_ptr};

// ─── Reporting ──────────────────────────────────────────────────────
pub use crate::report::{ErrorSnapshot, Report, ReportOptions, log_unhandled};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, ReportConfig, load_report_config};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::DEFAULT_MESSAGE;
