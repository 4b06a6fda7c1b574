//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! literal decoding and final token conversion.

use logos::Logos;

/// Raw token from logos (before literal decoding).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("=")]
    Eq,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Decoded in `convert` so that overflow becomes an error token
    // instead of a lexer failure.
    #[regex(r"[+-]?[0-9]+")]
    Int,

    // A dot or an exponent makes it a double.
    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Double,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // Runs to end of input; only wins when the closing quote is missing.
    #[regex(r#""([^"\\]|\\.)*\\?"#)]
    UnterminatedString,

    // A `[]` glued to the name belongs to the identifier (`int[]`).
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\[\])?")]
    Ident,
}
