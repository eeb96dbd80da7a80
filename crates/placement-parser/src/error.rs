//! Error and diagnostic system for the Placement parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, source locations inside
//! the directive string, and help text. A diagnostic is wrapped in a
//! [`ParseError`] when returned from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use placement_parser::error::{Diagnostic, ErrorCode};
//! # use placement_parser::Span;
//!
//! let diag = Diagnostic::error("unresolved position reference")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(6..13), "no element named `missing`")
//!     .with_help("anchor the element to a key that exists in the collection");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
