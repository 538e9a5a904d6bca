use std::iter::Peekable;

use crate::{
    ast::{Definition, TokenId},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            expression::parse_expression,
            utils::{end_of_input, expect, unexpected},
        },
    },
};

/// Parses a single definition.
///
/// Grammar: `definition := TYPE_TAG IDENTIFIER '=' expression ';'`
///
/// The type tag is only checked syntactically; whether the value really has
/// that type is left to the evaluator and the typed accessors.
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs, positioned at
///   the type tag.
/// - `source`: The source text, for diagnostics.
///
/// # Returns
/// The parsed [`Definition`].
pub fn parse_definition<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Definition>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let type_tag = expect(tokens, source, TokenKind::TypeTag)?;
    let name = expect(tokens, source, TokenKind::Identifier)?;
    let assign = parse_assign(tokens, source)?;
    let value = parse_expression(tokens, source)?;
    let semicolon = expect(tokens, source, TokenKind::Semicolon)?;

    Ok(Definition { type_tag,
                    name,
                    assign,
                    value,
                    semicolon })
}

/// Consumes the `=` of a definition.
///
/// `=` is lexed as an operator, so any other operator in this position is
/// reported the same way as a token of the wrong kind.
fn parse_assign<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<TokenId>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.next() {
        Some((id, token)) if token.kind == TokenKind::Operator && token.text(source) == "=" => {
            Ok(TokenId(id))
        },
        Some((_, token)) => Err(unexpected(source, token, "'='")),
        None => Err(end_of_input(source, "'='")),
    }
}
