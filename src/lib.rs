//! # hotprops
//!
//! hotprops reads small, hand-edited properties files of typed variable
//! definitions and keeps them up to date while a program runs. It is meant
//! for render loops: tweak a camera position or a light color in a text
//! editor, save, and see the change on the next frame.
//!
//! ```text
//! float       z_near   = 0.1f;
//! float       z_far    = z_near + 100.0f;
//! glm::vec3   cam_pos  = { 0.0f, 0.0f, 3.0f };
//! std::string title    = "demo";
//! bool        wireframe = false;
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::interpret, lexer::tokenize, parser::core::parse,
};

/// Defines the structure of parsed definitions.
///
/// This module declares the `Expr` enum and the `Definition` struct that
/// represent a properties file as a sequence of typed assignments. Nodes refer
/// to tokens by index, which keeps the tree free of borrows and lets errors
/// point back into the source.
pub mod ast;
/// Provides the error types for every stage.
///
/// Lexing, parsing and evaluation errors abort a whole load. Accessor errors
/// are local to one lookup. Reader errors wrap the former with the file path.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers, caret pointers and file paths for context.
pub mod error;
/// Orchestrates turning source text into bindings.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Reloadable, typed access to a properties file.
///
/// # Responsibilities
/// - Loads a file once at construction and reloads it when its modification
///   time changes, swapping bindings only on success.
/// - Provides typed getters with "did you mean" and type mismatch
///   diagnostics.
pub mod reader;
/// General helpers shared by the pipeline stages.
pub mod util;

pub use error::{AccessError, LoadError, ReaderError};
pub use interpreter::{
    evaluator::core::Bindings,
    value::{core::Value, kind::ValueKind},
};
pub use reader::core::Reader;

/// Lexes, parses and evaluates properties source into its final bindings.
///
/// This is the pipeline run by [`Reader::new`] and [`Reader::update_changes`].
/// It either produces the complete set of bindings or fails; nothing is
/// partially applied.
///
/// # Errors
/// Returns a [`LoadError`] if any stage fails.
///
/// # Examples
/// ```
/// use hotprops::{Value, build_bindings};
///
/// let source = "float r = 10.0f - 3.0f - 2.0f;";
/// let bindings = build_bindings(source).unwrap();
/// // Operator chains associate to the right.
/// assert_eq!(bindings["r"], Value::Float(9.0));
///
/// // Forward references are rejected.
/// let source = "float b = a + 1.0f;\nfloat a = 2.0f;";
/// assert!(build_bindings(source).is_err());
/// ```
pub fn build_bindings(source: &str) -> Result<Bindings, LoadError> {
    let tokens = tokenize(source)?;
    let definitions = parse(source, &tokens)?;
    let bindings = interpret(source, &tokens, &definitions)?;

    Ok(bindings)
}
