//! Error codes for the Placement diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Directive syntax errors
//! - `E2xx` - Resolution errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unrecognized input.
    ///
    /// The lexer could not split the directive into tokens.
    E001,

    // =========================================================================
    // Directive Syntax Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A token appeared where the directive grammar does not allow it, such
    /// as an unknown keyword, a non-integer priority, or trailing input.
    E100,

    /// Incomplete directive.
    ///
    /// The directive ended before it was complete, e.g. `before` without a
    /// target key, or the directive was empty.
    E101,

    /// Integer out of range.
    ///
    /// A rank or priority does not fit in a 64-bit signed integer.
    E102,

    // =========================================================================
    // Resolution Errors (E2xx)
    // =========================================================================
    /// Unresolved position reference.
    ///
    /// A `before`/`after` directive names a key that is not in the
    /// collection, or that only takes part in a cycle of anchored elements.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unrecognized input",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete directive",
            ErrorCode::E102 => "integer out of range",
            ErrorCode::E200 => "unresolved position reference",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "incomplete directive");
        assert_eq!(ErrorCode::E102.description(), "integer out of range");
        assert_eq!(
            ErrorCode::E200.description(),
            "unresolved position reference"
        );
    }
}
