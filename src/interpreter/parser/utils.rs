use std::iter::Peekable;

use crate::{
    ast::TokenId,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    util::source::{line_of, pointer},
};

/// Consumes the next token, requiring it to be of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs.
/// - `source`: The source text, for diagnostics.
/// - `kind`: The required token kind.
///
/// # Returns
/// The index of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token has another kind,
/// - the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    source: &str,
                                                    kind: TokenKind)
                                                    -> ParseResult<TokenId>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.next() {
        Some((id, token)) if token.kind == kind => Ok(TokenId(id)),
        Some((_, token)) => Err(unexpected(source, token, kind.name())),
        None => Err(end_of_input(source, kind.name())),
    }
}

/// Builds an `UnexpectedToken` error pointing at `token`.
pub(in crate::interpreter::parser) fn unexpected(source: &str,
                                                 token: &Token,
                                                 expected: &'static str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  found: format!("{} '{}'", token.kind, token.text(source)),
                                  line: line_of(source, token.span.start),
                                  pointer: pointer(source, token.span.start) }
}

/// Builds an `UnexpectedEndOfInput` error located on the last line.
pub(in crate::interpreter::parser) fn end_of_input(source: &str,
                                                   expected: &'static str)
                                                   -> ParseError {
    ParseError::UnexpectedEndOfInput { expected,
                                       line: line_of(source, source.len()) }
}

/// Builds a `NestingTooDeep` error pointing at the rejected `{`.
pub(in crate::interpreter::parser) fn too_deep(source: &str,
                                               token: &Token,
                                               limit: usize)
                                               -> ParseError {
    ParseError::NestingTooDeep { limit,
                                 line: line_of(source, token.span.start),
                                 pointer: pointer(source, token.span.start) }
}
