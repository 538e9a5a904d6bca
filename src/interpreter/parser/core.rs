use crate::{
    ast::Definition,
    error::ParseError,
    interpreter::{lexer::Token, parser::definition::parse_definition},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole properties file.
///
/// This is the entry point for parsing.
///
/// Grammar: `program := definition*`
///
/// # Parameters
/// - `source`: The source the tokens were produced from; used for
///   diagnostics.
/// - `tokens`: The token vector returned by the lexer.
///
/// # Returns
/// The definitions in file order.
///
/// # Errors
/// Returns the first [`ParseError`] encountered. Nothing is returned for the
/// definitions parsed before it.
///
/// # Example
/// ```
/// use hotprops::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let source = "float z_near = 3.0f;\nfloat z_far = z_near + 10.0f;";
/// let tokens = tokenize(source).unwrap();
/// let definitions = parse(source, &tokens).unwrap();
///
/// assert_eq!(definitions.len(), 2);
/// assert_eq!(tokens[definitions[1].name.0].text(source), "z_far");
/// ```
pub fn parse(source: &str, tokens: &[Token]) -> ParseResult<Vec<Definition>> {
    let mut iter = tokens.iter().enumerate().peekable();
    let mut definitions = Vec::new();

    while iter.peek().is_some() {
        definitions.push(parse_definition(&mut iter, source)?);
    }

    Ok(definitions)
}
