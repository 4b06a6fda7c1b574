//! Tokenizer for infact using logos.
//!
//! Whitespace and `//` line comments are dropped. Malformed input becomes a
//! `TokenKind::Error` token in place, so the parser reports it only when it
//! gets there and earlier statements still take effect.

mod convert;
mod escape;
mod raw_token;

use infact_ir::{LexErrorKind, Span, Token, TokenKind, TokenList};
use logos::Logos;

use convert::convert_token;
use raw_token::RawToken;

pub use escape::quote;

/// Lex `source` into a `TokenList` ending in `Eof`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 4 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(raw) => convert_token(raw, slice),
            Err(()) => {
                let bad = slice.chars().next().unwrap_or('\u{fffd}');
                TokenKind::Error(LexErrorKind::UnexpectedChar(bad))
            }
        };
        result.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

/// First lexical error in `tokens`, if any.
pub fn first_error(tokens: &TokenList) -> Option<(&LexErrorKind, Span)> {
    tokens.iter().find_map(|token| match &token.kind {
        TokenKind::Error(kind) => Some((kind, token.span)),
        _ => None,
    })
}
