//! nullref Common Library
//!
//! This crate provides the null-reference error type and the small amount
//! of machinery around it: the base error capability it specializes,
//! helpers that raise it at null-check sites, and diagnostic reporting for
//! errors that reach the top of a unit of work unhandled.
//!
//! # Module Structure
//!
//! - [`consts`] - Default diagnostic literal and reporting limits
//! - [`base`] - [`BaseError`](base::BaseError) capability and capture sites
//! - [`null_reference`] - [`NullReferenceError`](null_reference::NullReferenceError)
//! - [`check`] - Null checks that raise `NullReferenceError`
//! - [`report`] - Diagnostic rendering and unhandled-error logging
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use nullref_common::prelude::*;
//!
//! fn first_char(s: Option<&str>) -> Result<char, NullReferenceError> {
//!     let s = s.or_null_ref_with("input string was null")?;
//!     Ok(s.chars().next().unwrap_or(' '))
//! }
//!
//! let err = first_char(None).unwrap_err();
//! assert_eq!(err.message(), "input string was null");
//! ```

pub mod base;
pub mod check;
pub mod config;
pub mod consts;
pub mod null_reference;
pub mod prelude;
pub mod report;
