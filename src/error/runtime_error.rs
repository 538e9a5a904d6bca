use crate::interpreter::value::kind::ValueKind;

/// Represents all errors that can occur while interpreting definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Referenced a name that has no binding yet.
    ///
    /// Definitions are evaluated in file order, so this also covers forward
    /// references to names defined further down.
    #[error("Error on line {line}: undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator is not defined for these operand kinds.
    #[error("Error on line {line}: operator '{op}' is not supported for {left} and {right}.")]
    UnsupportedOperator {
        /// The operator text.
        op:    String,
        /// Kind of the left operand, which selects the operator table.
        left:  ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A vec3 component evaluated to something other than a float.
    #[error("Error on line {line}: vec3 component {axis} must be float, found {found}.")]
    ExpectedFloat {
        /// Which component: `x`, `y` or `z`.
        axis:  char,
        /// The kind the component actually produced.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal token could not be converted to a value.
    #[error("Error on line {line}: invalid literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
