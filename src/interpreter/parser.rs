/// Parser entry point.
///
/// Holds the `parse` function that turns a token vector into the ordered
/// list of definitions, plus the shared result type.
pub mod core;

/// Definition parsing.
///
/// Parses a single `TYPE name = expression;` definition.
pub mod definition;

/// Expression parsing.
///
/// Parses literals, identifiers, vec3 constructors and right-associative
/// operator chains.
pub mod expression;

/// Utility functions for the parser.
///
/// Token expectations and error construction with caret pointers.
pub mod utils;
