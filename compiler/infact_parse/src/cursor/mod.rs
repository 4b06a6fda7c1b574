//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, and consumption. The cursor never
//! moves past the trailing `Eof`.

use std::mem::discriminant;

use infact_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// `tokens` must end in `Eof`, as every `infact_lexer::lex` result does.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end in Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind (or skip) to `pos`, clamped to the `Eof` token.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.last_index());
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Token kind at offset `n` from the current position.
    ///
    /// `peek_kind_at(0)` is the current token. Past the end this is `Eof`.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        let index = (self.pos + n).min(self.last_index());
        &self.tokens[index].kind
    }

    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        self.peek_kind_at(1)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Consume the current token and return it. At `Eof` this is a no-op.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos < self.last_index() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume an identifier, returning its text and span.
    pub fn expect_ident(&mut self, what: &str) -> Result<(&'a str, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// Error for the current token when `expected` was wanted.
    ///
    /// A malformed token is reported as the lexical error it carries.
    #[cold]
    #[inline(never)]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::Error(lex) => ParseErrorKind::Lex(lex.clone()),
            found => ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
            },
        };
        ParseError::new(kind, token.span)
    }
}
