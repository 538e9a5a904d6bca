use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// The operator table is chosen by the kind of the left operand:
    /// - string: `+` (concatenation),
    /// - vec3: `+` and `-` (component-wise),
    /// - float: `+`, `-`, `*` and `/`,
    /// - bool: nothing.
    ///
    /// The right operand must have the same kind as the left one.
    ///
    /// # Parameters
    /// - `op`: The operator text.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use hotprops::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let sum = Context::eval_binary("+", &Value::from("ab"), &Value::from("cd"), 1).unwrap();
    /// assert_eq!(sum, Value::from("abcd"));
    ///
    /// assert!(Context::eval_binary("*", &Value::from("ab"), &Value::from("cd"), 1).is_err());
    /// ```
    pub fn eval_binary(op: &str, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let result = match (left, right) {
            (Value::String(a), Value::String(b)) => match op {
                "+" => Some(Value::String(format!("{a}{b}"))),
                _ => None,
            },
            (Value::Vec3(a), Value::Vec3(b)) => match op {
                "+" => Some(Value::Vec3(*a + *b)),
                "-" => Some(Value::Vec3(*a - *b)),
                _ => None,
            },
            (Value::Float(a), Value::Float(b)) => match op {
                "+" => Some(Value::Float(a + b)),
                "-" => Some(Value::Float(a - b)),
                "*" => Some(Value::Float(a * b)),
                "/" => Some(Value::Float(a / b)),
                _ => None,
            },
            _ => None,
        };

        result.ok_or_else(|| EvalError::UnsupportedOperator { op:    op.to_string(),
                                                              left:  left.kind(),
                                                              right: right.kind(),
                                                              line })
    }
}
