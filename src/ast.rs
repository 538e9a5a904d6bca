/// Index of a token inside the token vector produced by the lexer.
///
/// AST nodes refer to tokens by index rather than by reference, so the tree
/// can outlive borrows of the token vector and be evaluated against it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub usize);

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children. Leaves point at their token;
/// identifiers are resolved against the environment only at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A float, string or bool literal.
    Literal {
        /// The literal token.
        token: TokenId,
    },
    /// Reference to an earlier definition by name.
    Identifier {
        /// The identifier token.
        token: TokenId,
    },
    /// A `{ x, y, z }` vector constructor.
    Vec3 {
        /// The opening `{`, used for error locations.
        open: TokenId,
        /// X component.
        x:    Box<Self>,
        /// Y component.
        y:    Box<Self>,
        /// Z component.
        z:    Box<Self>,
    },
    /// A chain of binary operations, `operand (OP operand)*`.
    ///
    /// Chains associate to the right, so `a - b - c` is `a - (b - c)`. Every
    /// operand except the last is a literal or an identifier; the last one may
    /// also be a vec3 constructor. The chain is stored flat.
    BinaryChain {
        /// First operand.
        first: Box<Self>,
        /// Each operator paired with the operand following it.
        rest:  Vec<(TokenId, Self)>,
    },
}

impl Expr {
    /// Returns the first token of the expression in source order.
    #[must_use]
    pub fn first_token(&self) -> TokenId {
        match self {
            Self::Literal { token } | Self::Identifier { token } => *token,
            Self::Vec3 { open, .. } => *open,
            Self::BinaryChain { first, .. } => first.first_token(),
        }
    }
}

/// A single `TYPE name = expression;` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The declared type tag. Only checked syntactically.
    pub type_tag:  TokenId,
    /// The defined name.
    pub name:      TokenId,
    /// The `=` operator token.
    pub assign:    TokenId,
    /// The value expression.
    pub value:     Expr,
    /// The terminating `;`.
    pub semicolon: TokenId,
}
