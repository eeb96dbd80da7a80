//! # Placement Parser
//!
//! Parser for position directives, the short strings that say where an
//! element goes in an ordered collection. This crate turns a raw directive
//! into a [`placement_core::directive::PositionDirective`].
//!
//! ## Usage
//!
//! ```
//! # use placement_parser::{parse, error::ParseError};
//! use placement_core::directive::PositionDirective;
//!
//! fn main() -> Result<(), ParseError> {
//!     let parsed = parse(Some("start 10"))?;
//!     assert_eq!(parsed.directive(), &PositionDirective::Start { priority: 10 });
//!
//!     let parsed = parse(None)?;
//!     assert_eq!(parsed.directive(), &PositionDirective::Middle { rank: 0 });
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod span;
mod tokens;

pub use parser_types::ParsedDirective;
pub use span::Span;

use log::debug;

use error::ParseError;

/// Parse a raw position string into a directive.
///
/// This is the main entry point for parsing position directives. A missing
/// string places the element in the middle with rank `0`. Otherwise the
/// string is processed in two steps:
///
/// 1. **Tokenize** - Split the string into keywords, integers and words
/// 2. **Parse** - Match the grammar and range-check integers
///
/// # Arguments
///
/// * `source` - The raw position string, if the element has one
///
/// # Returns
///
/// Returns the [`ParsedDirective`] on success, or a [`ParseError`] whose
/// diagnostic carries spans into `source` on failure.
///
/// # Example
///
/// ```
/// # use placement_parser::parse;
/// use placement_core::{directive::PositionDirective, key::Key};
///
/// let parsed = parse(Some("after header 5")).unwrap();
/// assert_eq!(
///     parsed.into_directive(),
///     PositionDirective::After { target: Key::new("header"), priority: 5 }
/// );
/// assert!(parse(Some("sideways")).is_err());
/// ```
pub fn parse(source: Option<&str>) -> Result<ParsedDirective, ParseError> {
    let Some(source) = source else {
        return Ok(ParsedDirective::default());
    };

    // Step 1: Tokenize
    let tokens = lexer::tokenize(source)?;

    // Step 2: Parse
    let parsed = parser::build_directive(&tokens, source.len())?;

    debug!(source, directive:% = parsed.directive(); "Parsed position directive");
    Ok(parsed)
}
