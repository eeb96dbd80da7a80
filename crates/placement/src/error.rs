//! Error types for Placement operations.
//!
//! This module provides the main error type [`PlacementError`] together with
//! the per-element details it carries. Both variants are fatal to a sort:
//! no partial ordering is ever returned.

use std::fmt;

use thiserror::Error;

use placement_core::key::Key;
use placement_parser::{
    Span,
    error::{Diagnostic, ErrorCode, ParseError},
};

/// The main error type for Placement operations.
///
/// # Diagnostic Variants
///
/// Every entry in either variant keeps the raw position string it came from,
/// so callers can render the attached diagnostic against that string.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("invalid position directive for {}", invalid_keys(.invalid))]
    InvalidDirectiveSyntax { invalid: Vec<InvalidDirective> },

    #[error("unresolved position reference for {}", unresolved_keys(.unresolved))]
    UnresolvedPositionReference { unresolved: Vec<UnresolvedReference> },
}

fn key_list<'a>(keys: impl Iterator<Item = &'a Key>) -> String {
    keys.map(|key| format!("`{key}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn invalid_keys(invalid: &[InvalidDirective]) -> String {
    key_list(invalid.iter().map(InvalidDirective::key))
}

fn unresolved_keys(unresolved: &[UnresolvedReference]) -> String {
    key_list(unresolved.iter().map(UnresolvedReference::key))
}

/// A position string that does not match the directive grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDirective {
    key: Key,
    raw: String,
    error: ParseError,
}

impl InvalidDirective {
    pub(crate) fn new(key: Key, raw: impl Into<String>, error: ParseError) -> Self {
        Self {
            key,
            raw: raw.into(),
            error,
        }
    }

    /// Key of the element carrying the directive.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The position string as it was supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parser diagnostic, with spans into [`raw`](Self::raw).
    pub fn error(&self) -> &ParseError {
        &self.error
    }
}

impl fmt::Display for InvalidDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` has position {:?}: {}", self.key, self.raw, self.error)
    }
}

/// A `before`/`after` directive whose anchor could not be placed.
///
/// The anchor is either missing from the collection or only reachable
/// through other unplaced elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    key: Key,
    target: Key,
    raw: String,
    target_span: Option<Span>,
}

impl UnresolvedReference {
    pub(crate) fn new(
        key: Key,
        target: Key,
        raw: impl Into<String>,
        target_span: Option<Span>,
    ) -> Self {
        Self {
            key,
            target,
            raw: raw.into(),
            target_span,
        }
    }

    /// Key of the element that could not be placed.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The anchor key it refers to.
    pub fn target(&self) -> &Key {
        &self.target
    }

    /// The position string as it was supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Span of the anchor key inside [`raw`](Self::raw).
    pub fn target_span(&self) -> Option<Span> {
        self.target_span
    }

    /// Build a diagnostic pointing at the anchor key in the raw string.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(format!(
            "cannot place `{}`: position reference `{}` cannot be resolved",
            self.key, self.target
        ))
        .with_code(ErrorCode::E200)
        .with_help(format!(
            "`{}` must be a key of the collection, or be anchored to one without forming a cycle",
            self.target
        ));

        match self.target_span {
            Some(span) => diag.with_label(span, "no element to anchor to"),
            None => diag,
        }
    }
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` references unknown `{}`", self.key, self.target)
    }
}
