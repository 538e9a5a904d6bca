use std::path::PathBuf;

use crate::error::{EvalError, LexError, ParseError};

/// Failure of the lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form valid definitions.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A definition failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Errors raised while constructing or reloading a reader.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The properties file could not be read or stat'ed.
    #[error("can't access properties file [{}]: {source}", .path.display())]
    Io {
        /// The properties file.
        path:   PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
    /// The initial load failed, so no reader exists.
    #[error("can't load properties file [{}]: {source}", .path.display())]
    Load {
        /// The properties file.
        path:   PathBuf,
        /// The pipeline failure.
        source: LoadError,
    },
    /// A reload failed; the previous bindings are still in place.
    #[error("can't reload properties file [{}]: {source}", .path.display())]
    ReloadFailed {
        /// The properties file.
        path:   PathBuf,
        /// The pipeline failure.
        source: LoadError,
    },
}
