/// Binary operator evaluation logic.
///
/// Applies `+ - * /` according to the runtime kind of the left operand.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the environment of bindings built in
/// file order, and the `interpret` entry point.
pub mod core;
