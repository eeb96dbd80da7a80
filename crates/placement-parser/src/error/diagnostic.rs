//! The core diagnostic type for the Placement error system.
//!
//! A [`Diagnostic`] represents a single error with optional error code,
//! labeled spans inside the directive string, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// Spans are byte offsets into the raw position string the diagnostic was
/// produced for. The string itself is carried by the container error type.
///
/// # Example
///
/// ```text
/// error[E100]: unexpected `top`, expected `start`, `end`, `before`, `after` or an integer
///    |
///  1 | top 10
///    | ^^^ unexpected token
///    |
///    = help: valid directives are `start [priority]`, `end [priority]`, ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use placement_parser::error::{Diagnostic, ErrorCode};
    /// # use placement_parser::Span;
    ///
    /// let span = Span::new(6..26);
    /// let diag = Diagnostic::error("integer `99999999999999999999` is out of range")
    ///     .with_code(ErrorCode::E102)
    ///     .with_label(span, "does not fit in a 64-bit signed integer");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("incomplete").with_code(ErrorCode::E101);

        assert_eq!(diag.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_diagnostic_with_label() {
        let diag = Diagnostic::error("test error").with_label(Span::new(0..5), "error here");

        assert_eq!(diag.labels().len(), 1);
        assert!(diag.labels()[0].is_primary());
        assert_eq!(diag.labels()[0].message(), "error here");
    }

    #[test]
    fn test_diagnostic_with_secondary_label() {
        let diag = Diagnostic::error("trailing token")
            .with_label(Span::new(8..9), "unexpected token")
            .with_secondary_label(Span::new(0..7), "directive is complete here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unexpected `top`").with_code(ErrorCode::E100);

        assert_eq!(diag.to_string(), "error[E100]: unexpected `top`");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("something went wrong");

        assert_eq!(diag.to_string(), "error: something went wrong");
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("unresolved position reference")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(6..13), "no element named `missing`")
            .with_help("check the key for typos");

        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.message(), "unresolved position reference");
        assert_eq!(diag.labels().len(), 1);
        assert_eq!(diag.help(), Some("check the key for typos"));
    }
}
