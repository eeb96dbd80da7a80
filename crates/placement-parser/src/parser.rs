//! Parser for position directive tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer)
//! into a [`ParsedDirective`]. The public entry point is
//! [`build_directive`].
//!
//! Parsing happens in two steps: winnow parsers recognise the grammar and
//! produce a [`RawDirective`] that still holds integer text, then
//! [`elaborate`] range-checks the integers and interns the anchor key.

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, cut_err, eof, preceded, repeat},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use placement_core::{directive::PositionDirective, key::Key};

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types::{ParsedDirective, RawDirective},
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what the parser expected at the failure point
    Label(&'static str),
}

type Input<'src> = PlacementTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type PlacementTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

const DIRECTIVE_HELP: &str = "valid directives are `start [priority]`, `end [priority]`, \
     `before <key> [priority]`, `after <key> [priority]` or an integer";

/// Parse one whitespace token
fn whitespace<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Whitespace))
        .void()
        .parse_next(input)
}

/// Parse zero or more whitespace tokens
fn ws0<'src>(input: &mut Input<'src>) -> IResult<()> {
    repeat(0.., whitespace).parse_next(input)
}

/// Parse a keyword token
fn keyword<'src>(expected: Token<'static>) -> impl FnMut(&mut Input<'src>) -> IResult<()> {
    move |input: &mut Input<'src>| {
        any.verify(|token: &PositionedToken<'_>| token.token == expected)
            .void()
            .parse_next(input)
    }
}

/// Parse an integer token, keeping its text for later range checking
fn integer<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    preceded(
        ws0,
        any.verify_map(|token: &'src PositionedToken<'src>| match token.token {
            Token::Integer(text) => Some(Spanned::new(text, token.span)),
            _ => None,
        }),
    )
    .parse_next(input)
}

/// Parse the anchor key of `before`/`after`.
///
/// Any non-whitespace token names a key, including keywords and integers.
fn target_key<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    preceded(
        ws0,
        any.verify_map(|token: &'src PositionedToken<'src>| {
            token
                .token
                .text()
                .map(|text| Spanned::new(text, token.span))
        }),
    )
    .context(Context::Label("a target key"))
    .parse_next(input)
}

/// Parse an optional trailing priority.
///
/// Anything other than the end of the directive must be an integer.
fn priority<'src>(input: &mut Input<'src>) -> IResult<Option<Spanned<&'src str>>> {
    ws0.parse_next(input)?;
    if input.eof_offset() == 0 {
        return Ok(None);
    }

    integer
        .context(Context::Label("an integer priority"))
        .map(Some)
        .parse_next(input)
}

/// Parse trailing whitespace up to the end of input
fn end_of_directive<'src>(input: &mut Input<'src>) -> IResult<()> {
    preceded(ws0, eof.void())
        .context(Context::Label("the end of the directive"))
        .parse_next(input)
}

fn start_directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    preceded(keyword(Token::Start), cut_err(priority))
        .map(RawDirective::Start)
        .parse_next(input)
}

fn end_directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    preceded(keyword(Token::End), cut_err(priority))
        .map(RawDirective::End)
        .parse_next(input)
}

fn before_directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    preceded(keyword(Token::Before), cut_err((target_key, priority)))
        .map(|(target, priority)| RawDirective::Before(target, priority))
        .parse_next(input)
}

fn after_directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    preceded(keyword(Token::After), cut_err((target_key, priority)))
        .map(|(target, priority)| RawDirective::After(target, priority))
        .parse_next(input)
}

fn numeric_directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    integer.map(RawDirective::Numeric).parse_next(input)
}

/// Parse a complete directive, surrounded by optional whitespace
fn directive<'src>(input: &mut Input<'src>) -> IResult<RawDirective<'src>> {
    ws0.parse_next(input)?;

    let directive = alt((
        start_directive,
        end_directive,
        before_directive,
        after_directive,
        numeric_directive,
    ))
    .context(Context::Label("`start`, `end`, `before`, `after` or an integer"))
    .parse_next(input)?;

    end_of_directive.parse_next(input)?;

    Ok(directive)
}

/// Convert integer text to a value, rejecting out-of-range literals
fn to_integer(text: Spanned<&str>) -> Result<i64, Diagnostic> {
    text.inner().parse::<i64>().map_err(|_| {
        Diagnostic::error(format!("integer `{}` is out of range", text.inner()))
            .with_code(ErrorCode::E102)
            .with_label(text.span(), "does not fit in a 64-bit signed integer")
            .with_help(format!(
                "use a value between {} and {}",
                i64::MIN,
                i64::MAX
            ))
    })
}

fn to_priority(text: Option<Spanned<&str>>) -> Result<i64, Diagnostic> {
    text.map_or(Ok(0), to_integer)
}

/// Turn the syntactic form into a structured directive
fn elaborate(raw: RawDirective<'_>) -> Result<ParsedDirective, Diagnostic> {
    let parsed = match raw {
        RawDirective::Start(priority) => ParsedDirective::from(PositionDirective::Start {
            priority: to_priority(priority)?,
        }),
        RawDirective::End(priority) => ParsedDirective::from(PositionDirective::End {
            priority: to_priority(priority)?,
        }),
        RawDirective::Numeric(rank) => ParsedDirective::from(PositionDirective::Middle {
            rank: to_integer(rank)?,
        }),
        RawDirective::Before(target, priority) => ParsedDirective::new(
            PositionDirective::Before {
                target: Key::new(target.inner()),
                priority: to_priority(priority)?,
            },
            Some(target.span()),
        ),
        RawDirective::After(target, priority) => ParsedDirective::new(
            PositionDirective::After {
                target: Key::new(target.inner()),
                priority: to_priority(priority)?,
            },
            Some(target.span()),
        ),
    };

    Ok(parsed)
}

/// Utility function to convert winnow errors to our custom error format
///
/// The failure position is the first non-whitespace token at or after the
/// point where the parser stopped. Running out of tokens there means the
/// directive is incomplete; otherwise that token was unexpected.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken<'_>],
    current_remaining: usize,
    source_len: usize,
) -> Diagnostic {
    let expected = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().find_map(|ctx| match ctx {
            Context::Label(label) => Some(*label),
        }),
        ErrMode::Incomplete(_) => None,
    }
    .unwrap_or("a position directive");

    let position = tokens.len() - current_remaining;
    let offending = tokens[position..]
        .iter()
        .find(|t| !matches!(t.token, Token::Whitespace));

    let consumed = tokens[..position]
        .iter()
        .filter(|t| !matches!(t.token, Token::Whitespace))
        .map(|t| t.span)
        .reduce(|acc, span| acc.union(span));

    match offending {
        Some(token) => {
            let mut diag = Diagnostic::error(format!(
                "unexpected `{}`, expected {expected}",
                token.token
            ))
            .with_code(ErrorCode::E100)
            .with_label(token.span, ErrorCode::E100.description());
            if let Some(span) = consumed {
                diag = diag.with_secondary_label(span, "valid up to here");
            }
            diag.with_help(DIRECTIVE_HELP)
        }
        None => {
            let end = Span::new(source_len..source_len);
            let (span, label) = match consumed {
                Some(span) => (span, "directive ends here"),
                None => (end, "empty directive"),
            };
            Diagnostic::error(format!("incomplete position directive, expected {expected}"))
                .with_code(ErrorCode::E101)
                .with_label(span, label)
                .with_help(DIRECTIVE_HELP)
        }
    }
}

/// Build a directive from tokens
///
/// `source_len` is the byte length of the raw string the tokens were
/// produced from, used to place errors at the end of the input.
pub fn build_directive(
    tokens: &[PositionedToken<'_>],
    source_len: usize,
) -> Result<ParsedDirective, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match directive.parse_next(&mut token_slice) {
        Ok(raw) => {
            trace!(raw:?; "Recognized directive");
            elaborate(raw)
        }
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining, source_len))
        }
    }
}
