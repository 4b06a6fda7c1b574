//! Parse error types.

use infact_ir::{LexErrorKind, Span};

/// A syntax error at `span`.
///
/// The message carries no location; the evaluator adds file, line and
/// import context when it reports the error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The parser reached a malformed token.
    #[error("{0}")]
    Lex(LexErrorKind),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("duplicate argument `{param}` in construction of `{type_name}`")]
    DuplicateArgument { type_name: String, param: String },

    #[error("vectors cannot contain vectors")]
    NestedVector,

    #[error("invalid type specifier `{0}`")]
    InvalidType(String),

    #[error("`{0}` is not a valid name here")]
    InvalidName(String),
}
