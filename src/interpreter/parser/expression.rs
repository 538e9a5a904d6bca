use std::iter::Peekable;

use crate::{
    ast::{Expr, TokenId},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{end_of_input, expect, too_deep, unexpected},
        },
    },
};

/// Maximum number of vec3 constructors nested inside one another.
///
/// A `{` opened at this depth is rejected with
/// [`ParseError::NestingTooDeep`](crate::error::ParseError::NestingTooDeep).
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses an expression.
///
/// Grammar:
/// ```text
/// expression := '{' expression ',' expression ',' expression '}'
///             | (FLOAT | STRING | BOOL | IDENTIFIER) [ OPERATOR expression ]
/// ```
///
/// Operator chains are read in a loop into a flat
/// [`Expr::BinaryChain`] and associate to the right:
/// `10.0f - 3.0f - 2.0f` is `10.0f - (3.0f - 2.0f)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
/// - `source`: The source text, for diagnostics.
///
/// # Returns
/// The parsed expression tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    parse_chain(tokens, source, 0)
}

/// Parses `operand (OPERATOR operand)*` at the given vec3 nesting depth.
///
/// A vec3 constructor ends the chain. Any other operand is terminated by
/// `;`, `,` or `}`, and every other token after it must be an operator.
fn parse_chain<'a, I>(tokens: &mut Peekable<I>, source: &str, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let first = parse_operand(tokens, source, depth)?;
    let mut rest = Vec::new();
    let mut extends = !matches!(first, Expr::Vec3 { .. });

    while extends {
        match tokens.peek() {
            Some(&(id, token)) if token.kind == TokenKind::Operator => {
                tokens.next();
                let operand = parse_operand(tokens, source, depth)?;
                extends = !matches!(operand, Expr::Vec3 { .. });
                rest.push((TokenId(id), operand));
            },
            Some((_, token))
                if matches!(token.kind,
                            TokenKind::Semicolon | TokenKind::Comma | TokenKind::RBrace) =>
            {
                extends = false;
            },
            Some((_, token)) => return Err(unexpected(source, token, "operator")),
            None => return Err(end_of_input(source, "operator or ';'")),
        }
    }

    if rest.is_empty() {
        Ok(first)
    } else {
        Ok(Expr::BinaryChain { first: Box::new(first),
                               rest })
    }
}

/// Parses a single operand: a literal, an identifier or a vec3 constructor.
fn parse_operand<'a, I>(tokens: &mut Peekable<I>, source: &str, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(&(id, token)) = tokens.peek() else {
        return Err(end_of_input(source, "expression"));
    };

    match token.kind {
        TokenKind::LBrace if depth >= MAX_NESTING_DEPTH => {
            Err(too_deep(source, token, MAX_NESTING_DEPTH))
        },
        TokenKind::LBrace => parse_vec3(tokens, source, depth + 1),
        TokenKind::Float | TokenKind::Str | TokenKind::Bool => {
            tokens.next();
            Ok(Expr::Literal { token: TokenId(id) })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Identifier { token: TokenId(id) })
        },
        _ => Err(unexpected(source, token, "expression")),
    }
}

/// Parses a vec3 constructor of the form `{ x, y, z }`.
///
/// Each component is a full expression; whether it yields a float is checked
/// at evaluation time. `depth` counts this constructor.
fn parse_vec3<'a, I>(tokens: &mut Peekable<I>, source: &str, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let open = expect(tokens, source, TokenKind::LBrace)?;
    let x = parse_chain(tokens, source, depth)?;
    expect(tokens, source, TokenKind::Comma)?;
    let y = parse_chain(tokens, source, depth)?;
    expect(tokens, source, TokenKind::Comma)?;
    let z = parse_chain(tokens, source, depth)?;
    expect(tokens, source, TokenKind::RBrace)?;

    Ok(Expr::Vec3 { open,
                    x: Box::new(x),
                    y: Box::new(y),
                    z: Box::new(z) })
}
