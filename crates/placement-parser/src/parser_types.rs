//! Parsed forms of a position directive.

use placement_core::{directive::PositionDirective, key::Key};

use crate::span::{Span, Spanned};

/// Syntactic form of a directive, before integers are range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawDirective<'src> {
    Start(Option<Spanned<&'src str>>),
    End(Option<Spanned<&'src str>>),
    Before(Spanned<&'src str>, Option<Spanned<&'src str>>),
    After(Spanned<&'src str>, Option<Spanned<&'src str>>),
    Numeric(Spanned<&'src str>),
}

/// A position directive together with where its anchor was written.
///
/// The anchor span lets resolution errors point at the exact key inside
/// the original position string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDirective {
    directive: PositionDirective,
    target_span: Option<Span>,
}

impl ParsedDirective {
    pub(crate) fn new(directive: PositionDirective, target_span: Option<Span>) -> Self {
        Self {
            directive,
            target_span,
        }
    }

    /// The structured directive.
    pub fn directive(&self) -> &PositionDirective {
        &self.directive
    }

    /// Consumes the parsed form, keeping only the directive.
    pub fn into_directive(self) -> PositionDirective {
        self.directive
    }

    /// The anchor key of a `before`/`after` directive.
    pub fn target(&self) -> Option<&Key> {
        self.directive.target()
    }

    /// Span of the anchor key inside the raw position string, if any.
    pub fn target_span(&self) -> Option<Span> {
        self.target_span
    }
}

impl From<PositionDirective> for ParsedDirective {
    fn from(directive: PositionDirective) -> Self {
        Self::new(directive, None)
    }
}
