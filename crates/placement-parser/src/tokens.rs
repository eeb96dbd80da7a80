//! Tokens of the position directive language.

use std::fmt;

use crate::span::Span;

/// Token types for position directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    // Keywords
    Start,
    End,
    Before,
    After,

    // Literals
    Integer(&'src str),
    Word(&'src str),

    // Whitespace
    Whitespace,
}

impl<'src> Token<'src> {
    /// The source text of a non-whitespace token.
    ///
    /// A `before`/`after` target may be any non-whitespace token, including
    /// keywords and integers, so the parser needs the text back.
    pub fn text(&self) -> Option<&'src str> {
        match *self {
            Token::Start => Some("start"),
            Token::End => Some("end"),
            Token::Before => Some("before"),
            Token::After => Some("after"),
            Token::Integer(text) | Token::Word(text) => Some(text),
            Token::Whitespace => None,
        }
    }
}

/// A token with position information for winnow integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, " "),
        }
    }
}
