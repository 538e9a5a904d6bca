use std::collections::HashMap;

use glam::Vec3;

use crate::{
    ast::{Definition, Expr, TokenId},
    error::EvalError,
    interpreter::{
        lexer::{Token, TokenKind},
        value::core::Value,
    },
    util::source::line_of,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The environment produced by interpretation: property name to value.
pub type Bindings = HashMap<String, Value>;

/// Stores the runtime evaluation context.
///
/// The context borrows the source and the token vector the AST indexes
/// into, and owns the environment that grows as definitions are executed.
pub struct Context<'src> {
    source:       &'src str,
    tokens:       &'src [Token],
    /// Every binding made so far. Later definitions overwrite earlier ones.
    pub bindings: Bindings,
}

impl<'src> Context<'src> {
    /// Creates a context with an empty environment.
    #[must_use]
    pub fn new(source: &'src str, tokens: &'src [Token]) -> Self {
        Self { source,
               tokens,
               bindings: Bindings::new() }
    }

    /// Evaluates an expression against the current environment.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The resulting value.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { token } => self.eval_literal(*token),
            Expr::Identifier { token } => self.eval_identifier(*token),
            Expr::Vec3 { open, x, y, z } => self.eval_vec3(*open, [&**x, &**y, &**z]),
            Expr::BinaryChain { first, rest } => self.eval_chain(first, rest),
        }
    }

    /// Executes one definition.
    ///
    /// The value is evaluated before the name is bound, so a definition never
    /// sees itself. Re-declaring a name silently replaces the old value.
    pub fn eval_definition(&mut self, definition: &Definition) -> EvalResult<()> {
        let value = self.eval(&definition.value)?;
        let name = self.text(definition.name).to_string();

        if let Some(old) = self.bindings.insert(name, value) {
            log::debug!("line {}: '{}' redefined, replacing [{old}]",
                        self.line(definition.name),
                        self.text(definition.name));
        }
        Ok(())
    }

    /// Consumes the context and returns the environment.
    #[must_use]
    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }

    fn token(&self, id: TokenId) -> &'src Token {
        &self.tokens[id.0]
    }

    fn text(&self, id: TokenId) -> &'src str {
        self.token(id).text(self.source)
    }

    fn line(&self, id: TokenId) -> usize {
        line_of(self.source, self.token(id).span.start)
    }

    fn eval_literal(&self, id: TokenId) -> EvalResult<Value> {
        let token = self.token(id);
        let text = token.text(self.source);
        let invalid = || EvalError::InvalidLiteral { literal: text.to_string(),
                                                     line:    self.line(id), };

        match token.kind {
            TokenKind::Str => Ok(Value::String(text.to_string())),
            TokenKind::Bool => Ok(Value::Bool(text == "true")),
            TokenKind::Float => {
                let digits = text.strip_suffix('f').unwrap_or(text);
                digits.parse::<f32>().map(Value::Float).map_err(|_| invalid())
            },
            _ => Err(invalid()),
        }
    }

    fn eval_identifier(&self, id: TokenId) -> EvalResult<Value> {
        let name = self.text(id);
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedIdentifier { name: name.to_string(),
                                                            line: self.line(id), })
    }

    /// Evaluates the operands of a chain left to right, then applies the
    /// operators from the right end back to the first one.
    fn eval_chain(&self, first: &Expr, rest: &[(TokenId, Expr)]) -> EvalResult<Value> {
        let mut pending = Vec::with_capacity(rest.len());
        let mut last = self.eval(first)?;

        for (op, operand) in rest {
            let next = self.eval(operand)?;
            pending.push((*op, std::mem::replace(&mut last, next)));
        }

        pending.into_iter().rev().try_fold(last, |right, (op, left)| {
                                     Self::eval_binary(self.text(op), &left, &right, self.line(op))
                                 })
    }

    fn eval_vec3(&self, open: TokenId, components: [&Expr; 3]) -> EvalResult<Value> {
        let mut xyz = [0.0_f32; 3];

        for ((slot, expr), axis) in xyz.iter_mut().zip(components).zip(['x', 'y', 'z']) {
            *slot = match self.eval(expr)? {
                Value::Float(f) => f,
                other => {
                    return Err(EvalError::ExpectedFloat { axis,
                                                          found: other.kind(),
                                                          line: self.line(expr.first_token()) });
                },
            };
        }

        log::trace!("line {}: vec3 {xyz:?}", self.line(open));
        Ok(Value::Vec3(Vec3::from_array(xyz)))
    }
}

/// Runs definitions in file order and returns the final bindings.
///
/// Each definition is evaluated against the environment built by the ones
/// before it, so forward references fail with
/// [`EvalError::UndefinedIdentifier`].
///
/// # Errors
/// Returns the first [`EvalError`]; no partial environment is returned.
///
/// # Example
/// ```
/// use hotprops::interpreter::{
///     evaluator::core::interpret,
///     lexer::tokenize,
///     parser::core::parse,
///     value::core::Value,
/// };
///
/// let source = "float w = 1024.0f;\nfloat h = 768.0f;\nfloat aspect = w / h;";
/// let tokens = tokenize(source).unwrap();
/// let definitions = parse(source, &tokens).unwrap();
/// let bindings = interpret(source, &tokens, &definitions).unwrap();
///
/// assert_eq!(bindings["aspect"], Value::Float(1024.0 / 768.0));
/// ```
pub fn interpret(source: &str,
                 tokens: &[Token],
                 definitions: &[Definition])
                 -> EvalResult<Bindings> {
    let mut context = Context::new(source, tokens);

    for definition in definitions {
        context.eval_definition(definition)?;
    }

    if log::log_enabled!(log::Level::Debug) {
        let mut names: Vec<_> = context.bindings.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in names {
            log::debug!("{name} = [{value}]");
        }
    }

    Ok(context.into_bindings())
}
