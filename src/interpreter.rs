/// The evaluator module executes definitions and computes values.
///
/// The evaluator walks the definitions in file order, evaluates each
/// expression against the environment built so far, and produces the final
/// name to value bindings.
///
/// # Responsibilities
/// - Evaluates literals, identifiers, vec3 constructors and binary
///   operations.
/// - Rejects references to names that are not bound yet.
/// - Reports operators applied to unsupported value kinds.
pub mod evaluator;
/// The lexer module tokenizes properties source.
///
/// The lexer reads the raw source text and produces an ordered vector of
/// tokens: type tags, identifiers, operators, literals and punctuation.
/// Whitespace and comments are dropped.
///
/// # Responsibilities
/// - Converts the input into tokens with their byte spans.
/// - Strips the quotes from string literals.
/// - Reports the unmatched rest of the input on malformed source.
pub mod lexer;
/// The parser module builds definitions from tokens.
///
/// The parser is a recursive descent over the token vector. It produces one
/// [`Definition`](crate::ast::Definition) per declared property, each holding
/// an expression tree that refers back to tokens by index.
///
/// # Responsibilities
/// - Validates the grammar of every definition.
/// - Reports unexpected tokens with a caret under the offending text.
pub mod parser;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum: string, vec3, float and bool.
/// - Names each value kind with the type tag used in properties files.
pub mod value;
