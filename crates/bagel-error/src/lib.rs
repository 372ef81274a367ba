//! # bagel-error
//!
//! Unified error handling for bagel-dot.
//!
//! - **ErrorKind**: what went wrong (e.g. ParseFailed, FileNotFound)
//! - **Error context**: operation name plus key/value pairs to locate the cause
//! - **Error source**: the wrapped library error, without leaking its type
//!
//! ## Usage
//!
//! ```rust
//! use bagel_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "missing field `id`")
//!         .with_operation("graph::from_yaml_str")
//!         .with_context("line", "12"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `bagel_error::Result<T>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is handled once; callers further up only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the bagel Error
pub type Result<T> = std::result::Result<T, Error>;
