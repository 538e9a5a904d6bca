use std::path::PathBuf;

use crate::interpreter::value::kind::ValueKind;

/// Errors raised by the typed accessors of a [`Reader`](crate::Reader).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No property with this name exists.
    #[error("can't get property [{name}] from file [{}]{}", .path.display(), best_match_hint(.suggestion))]
    NotFound {
        /// The requested name.
        name:       String,
        /// The properties file the reader was built from.
        path:       PathBuf,
        /// An existing name close enough to be a likely typo target.
        suggestion: Option<String>,
    },
    /// The property exists but holds another kind of value.
    #[error("can't get property [{name}]: you want type [{requested}] but you have type [{actual}] in properties file [{}]", .path.display())]
    TypeMismatch {
        /// The requested name.
        name:      String,
        /// The kind the accessor asked for.
        requested: ValueKind,
        /// The kind actually bound to `name`.
        actual:    ValueKind,
        /// The properties file the reader was built from.
        path:      PathBuf,
    },
}

fn best_match_hint(suggestion: &Option<String>) -> String {
    suggestion.as_ref()
              .map_or_else(String::new, |best| format!(", best match is [{best}]"))
}
