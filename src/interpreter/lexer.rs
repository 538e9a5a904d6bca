use std::{fmt, ops::Range};

use logos::Logos;

use crate::{error::LexError, util::source::line_of};

/// The kind of a lexical token in a properties file.
///
/// Rules are matched at every offset and the longest match wins. On a tie
/// exact `#[token]` rules outrank `#[regex]` rules, so the type tags and the
/// bool literals are never lexed as identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Type tags in front of a definition: `float`, `std::string`,
    /// `glm::vec3` and `bool`.
    #[token("float")]
    #[token("std::string")]
    #[token("glm::vec3")]
    #[token("bool")]
    TypeTag,
    /// `=`, `+`, `-`, `*` and `/`.
    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,
    /// Float literals with a mandatory `f` suffix, such as `3.0f`, `100.f`,
    /// `.5f` or `-2.0f`.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)f")]
    Float,
    /// Double-quoted string literals. Backslash escapes are accepted but kept
    /// verbatim.
    #[regex(r#""([^"\\]|\\.)*""#, allow_greedy = true)]
    Str,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Bool,
    /// Property names such as `z_near` or `cam_pos`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// `# Comments`, which also swallows `#include` lines.
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    HashComment,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TypeTag => "type tag",
            Self::Operator => "operator",
            Self::Float => "float literal",
            Self::Str => "string literal",
            Self::Bool => "bool literal",
            Self::Identifier => "identifier",
            Self::Semicolon => "';'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::LineComment | Self::HashComment => "comment",
            Self::Ignored => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by [`tokenize`].
///
/// The token only records where its text lives; the text itself stays in the
/// source string. String literal spans exclude the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Byte range of the token text inside the source.
    pub span: Range<usize>,
}

impl Token {
    /// Returns the token text.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.clone()]
    }
}

/// Converts source text into the ordered token sequence.
///
/// Whitespace and comments are consumed but never emitted.
///
/// # Errors
/// Returns a [`LexError`] holding the rest of the source when no rule matches
/// at the current offset.
///
/// # Example
/// ```
/// use hotprops::interpreter::lexer::{TokenKind, tokenize};
///
/// let source = r#"std::string title = "demo"; // window title"#;
/// let tokens = tokenize(source).unwrap();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::TypeTag,
///             TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Str,
///             TokenKind::Semicolon]);
/// assert_eq!(tokens[3].text(source), "demo");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let Ok(kind) = kind else {
            return Err(LexError { remaining: source[span.start..].to_string(),
                                  line:      line_of(source, span.start), });
        };

        let span = if kind == TokenKind::Str {
            span.start + 1..span.end - 1
        } else {
            span
        };

        log::trace!("{kind} = [{}]", &source[span.clone()]);
        tokens.push(Token { kind, span });
    }

    Ok(tokens)
}
