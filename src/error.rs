/// Lexing and parsing errors.
///
/// Defines the errors raised while turning source text into tokens and tokens
/// into definitions. Both are fatal to the whole load: nothing from a file
/// that fails here is ever applied.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while interpreting definitions in file order,
/// such as references to names that are not bound yet or operators applied
/// to the wrong kind of value.
pub mod runtime_error;
/// Typed accessor errors.
///
/// Raised by a single lookup on a loaded reader. They never invalidate the
/// bindings and name the properties file they were raised for.
pub mod access_error;
/// Reader lifecycle errors.
///
/// Wraps pipeline and filesystem failures raised while constructing a reader
/// or reloading its file.
pub mod reader_error;

pub use access_error::AccessError;
pub use parse_error::{LexError, ParseError};
pub use reader_error::{LoadError, ReaderError};
pub use runtime_error::EvalError;
