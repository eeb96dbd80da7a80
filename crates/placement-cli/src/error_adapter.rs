//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`PlacementError`] can name several elements, each with one diagnostic.
//! Every element is rendered independently, with its position string as the
//! source snippet.

use std::{borrow::Cow, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceSpan};

use placement::PlacementError;
use placement_parser::error::Diagnostic;

use crate::error::CliError;

/// Adapter for a single position diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] together with the position
/// string it points into, named after the element key, and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: Cow<'a, Diagnostic>,
    /// Position string for displaying snippets
    src: NamedSource<String>,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    ///
    /// # Arguments
    ///
    /// * `diag` - The diagnostic to render
    /// * `key` - Key of the element whose position string is shown
    /// * `src` - The position string the diagnostic's spans point into
    pub fn new(diag: Cow<'a, Diagnostic>, key: impl fmt::Display, src: &str) -> Self {
        Self {
            diag,
            src: NamedSource::new(key.to_string(), src.to_string()),
        }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("element", &self.src.name())
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`CliError`] variants without position diagnostics.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, configuration errors, and manifest errors.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "placement::io",
            CliError::Config(_) => "placement::config",
            CliError::Manifest { .. } => "placement::manifest",
            CliError::Placement(_) => "placement::position",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a placement [`Span`](placement_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: placement_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// For [`CliError::Placement`], this returns one [`Reportable`] for each
/// offending element. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Placement(PlacementError::InvalidDirectiveSyntax { invalid }) => invalid
            .iter()
            .map(|directive| {
                Reportable::Diagnostic(DiagnosticAdapter::new(
                    Cow::Borrowed(directive.error().diagnostic()),
                    directive.key(),
                    directive.raw(),
                ))
            })
            .collect(),
        CliError::Placement(PlacementError::UnresolvedPositionReference { unresolved }) => unresolved
            .iter()
            .map(|reference| {
                Reportable::Diagnostic(DiagnosticAdapter::new(
                    Cow::Owned(reference.to_diagnostic()),
                    reference.key(),
                    reference.raw(),
                ))
            })
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use placement::{CollectionBuilder, sort_positions};
    use placement_parser::{Span, error::ErrorCode};

    use super::*;

    fn placement_error(positions: &[(&str, Option<&str>)]) -> CliError {
        sort_positions(positions.iter().copied())
            .expect_err("positions should fail")
            .into()
    }

    #[test]
    fn test_single_diagnostic() {
        let err = placement_error(&[("menu", Some("sideways"))]);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(
                    d.to_string(),
                    "unexpected `sideways`, expected `start`, `end`, `before`, `after` or an integer"
                );
                assert_eq!(d.code().map(|c| c.to_string()), Some("E100".to_string()));
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_one_reportable_per_invalid_element() {
        let mut builder = CollectionBuilder::new();
        builder
            .insert_positioned("a", (), "before")
            .insert_positioned("b", (), "end")
            .insert_positioned("c", (), "start 1 2");
        let err: CliError = builder.build().expect_err("invalid positions").into();

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert!(reportables[0].to_string().starts_with("incomplete position directive"));
        assert!(reportables[1].to_string().starts_with("unexpected `2`"));
    }

    #[test]
    fn test_unresolved_references_are_diagnostics() {
        let err = placement_error(&[
            ("second", Some("after unknown")),
            ("third", Some("end")),
            ("first", None),
        ]);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(
                    d.code().map(|c| c.to_string()),
                    Some(ErrorCode::E200.to_string())
                );
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert_eq!(labels[0].offset(), 6);
                assert_eq!(labels[0].len(), 7);
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_non_placement_error() {
        let err = CliError::Manifest {
            path: PathBuf::from("page.toml"),
            message: "missing field `key`".to_string(),
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Invalid manifest page.toml: missing field `key`"
                );
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::error("error with labels")
            .with_label(Span::new(6..10), "primary label")
            .with_secondary_label(Span::new(0..5), "secondary label");

        let adapter = DiagnosticAdapter::new(Cow::Borrowed(&diag), "menu", "start high");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary label"));
        assert_eq!(labels[1].label(), Some("secondary label"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }
}
