//! The ParseError type for wrapping a parsing diagnostic.
//!
//! Parsing stops at the first problem in a position directive, so a
//! [`ParseError`] always carries exactly one [`Diagnostic`].

use std::fmt;

use crate::error::Diagnostic;

/// Error type for directive parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Get the diagnostic describing why parsing failed.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error("test error").with_code(ErrorCode::E100);
        let err: ParseError = diag.into();

        assert_eq!(err.diagnostic().message(), "test error");
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_parse_error_display() {
        let err: ParseError = Diagnostic::error("incomplete directive").into();

        assert_eq!(err.to_string(), "error: incomplete directive");
    }
}
