//! Token Conversion
//!
//! Converts raw logos tokens to final `TokenKind`, decoding literals.

use infact_ir::{LexErrorKind, TokenKind};

use crate::escape::unescape_string;
use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int => match slice.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => TokenKind::Error(LexErrorKind::IntegerOverflow(slice.to_string())),
        },
        RawToken::Double => match slice.parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::double(value),
            _ => TokenKind::Error(LexErrorKind::MalformedNumber(slice.to_string())),
        },
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(unescape_string(content))
        }
        RawToken::UnterminatedString => TokenKind::Error(LexErrorKind::UnterminatedString),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),

        RawToken::Eq => TokenKind::Eq,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    }
}
