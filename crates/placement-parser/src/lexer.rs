//! Lexical analyzer for position directives.
//!
//! The lexer converts a raw position string into a stream of
//! [`PositionedToken`]s. Directives are whitespace-separated, so every
//! maximal run of non-whitespace characters becomes exactly one token:
//! a keyword, an integer, or a plain word.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, not, opt, peek, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Succeed without consuming input if the next character ends a token.
fn token_boundary(input: &mut Input<'_>) -> IResult<()> {
    peek(not(one_of(|c: char| !c.is_whitespace()))).parse_next(input)
}

/// Parse keywords with word boundary checking
fn keyword<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        alt((
            literal("start").value(Token::Start),
            literal("end").value(Token::End),
            literal("before").value(Token::Before),
            literal("after").value(Token::After),
        )),
        // `ending` or `starts` are words, not keywords
        token_boundary,
    )
    .parse_next(input)
}

/// Parse an optionally signed decimal integer
fn integer<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated((opt(one_of(['+', '-'])), digit1).take(), token_boundary)
        .map(Token::Integer)
        .parse_next(input)
}

/// Parse any other run of non-whitespace characters
fn word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| !c.is_whitespace())
        .map(Token::Word)
        .parse_next(input)
}

fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace())
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        keyword, // Must come before word
        integer, // Must come before word
        word,
        whitespace,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();

    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Split a raw position string into tokens.
///
/// Every input has a tokenization, so the error path only guards against
/// a token parser that stops making progress.
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, Diagnostic> {
    let mut located_input = LocatingSlice::new(input);
    let mut tokens = Vec::new();

    while located_input.eof_offset() > 0 {
        match positioned_token(&mut located_input) {
            Ok(token) => tokens.push(token),
            Err(_) => {
                let error_pos = located_input.current_token_start();
                let span = Span::new(error_pos..input.len());
                return Err(Diagnostic::error("unrecognized input in position directive")
                    .with_code(ErrorCode::E001)
                    .with_label(span, ErrorCode::E001.description()));
            }
        }
    }

    Ok(tokens)
}
