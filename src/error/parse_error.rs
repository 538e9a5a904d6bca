/// No token rule matches the input at some offset.
///
/// This always means malformed or unterminated source, e.g. a string literal
/// missing its closing quote. `remaining` holds everything from the failing
/// offset to the end of the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}: no token matches the input starting from: {remaining}")]
pub struct LexError {
    /// The unconsumed rest of the source.
    pub remaining: String,
    /// The source line where lexing stopped.
    pub line:      usize,
}

/// Represents all errors that can occur while parsing definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token of the wrong kind.
    #[error("Error on line {line}: expected {expected} but got: {found}\n{pointer}")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: &'static str,
        /// The kind and text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The offending source line with a `^` under the token.
        pointer:  String,
    },
    /// Reached the end of input in the middle of a definition.
    #[error("Error on line {line}: expected {expected} but got: end of input")]
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: &'static str,
        /// The last line of the source.
        line:     usize,
    },
    /// Vec3 constructors are nested deeper than the parser accepts.
    #[error("Error on line {line}: vec3 constructors nested deeper than {limit} levels\n{pointer}")]
    NestingTooDeep {
        /// The maximum accepted nesting depth.
        limit:   usize,
        /// The source line holding the rejected `{`.
        line:    usize,
        /// The offending source line with a `^` under the `{`.
        pointer: String,
    },
}
