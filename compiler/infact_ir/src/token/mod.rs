//! Token types for the infact lexer.

use std::fmt;
use std::ops::Index;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// `import` and `null` are plain identifiers here; the grammar gives them
/// meaning by position. Doubles are stored as their bit pattern so that
/// `TokenKind` can be `Eq` and `Hash`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier, including a `[]` suffix glued to a type name (`int[]`).
    Ident(String),
    /// String literal with escapes already processed.
    Str(String),
    Int(i64),
    /// Double literal, stored as `f64::to_bits`.
    Double(u64),
    Bool(bool),

    /// `=`
    Eq,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// Malformed input. The parser reports it when it reaches this token,
    /// so statements before a lexical error still evaluate.
    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    #[inline]
    pub fn double(value: f64) -> Self {
        TokenKind::Double(value.to_bits())
    }

    /// Value of a `Double` token.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenKind::Double(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Identifier text, if this is an identifier.
    #[inline]
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this is the identifier `word`.
    #[inline]
    pub fn is_ident(&self, word: &str) -> bool {
        self.ident() == Some(word)
    }

    /// Whether this token is a literal (`true`, `42`, `1.5`, `"text"`).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Str(_) | TokenKind::Int(_) | TokenKind::Double(_) | TokenKind::Bool(_)
        )
    }

    /// Human-readable name of the kind, for "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Str(_) => "string literal",
            TokenKind::Int(_) => "integer literal",
            TokenKind::Double(_) => "double literal",
            TokenKind::Bool(_) => "boolean literal",
            TokenKind::Eq => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Error(_) => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Str(text) => write!(f, "string literal {text:?}"),
            TokenKind::Int(value) => write!(f, "integer literal `{value}`"),
            TokenKind::Double(bits) => write!(f, "double literal `{}`", f64::from_bits(*bits)),
            TokenKind::Bool(value) => write!(f, "boolean literal `{value}`"),
            TokenKind::Error(kind) => write!(f, "invalid token ({kind})"),
            other => f.write_str(other.display_name()),
        }
    }
}

/// What went wrong while tokenizing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognized character {0:?}")]
    UnexpectedChar(char),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOverflow(String),
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
}

/// Lexer output: every token of one source, always ending in `Eof`.
///
/// Restartable by construction: a parser holds a position into the list and
/// may rewind to any earlier index.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

#[cfg(test)]
mod tests;
