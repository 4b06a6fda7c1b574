//! Recursive descent parser for infact.
//!
//! The parser yields one statement at a time. Evaluation interleaves with
//! parsing: an import runs to completion before the next statement of the
//! importing file is even parsed, and a syntax error late in a file leaves
//! the effects of every earlier statement in place.

mod cursor;
mod error;
mod grammar;
mod stack;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use stack::ensure_sufficient_stack;

use infact_ir::{Stmt, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the next statement, or `None` at end of input.
    pub fn next_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        self.parse_statement().map(Some)
    }

    /// Whether every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Stmt, ParseError>;

    /// Yields statements until the end of input or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next_statement();
        if result.is_err() {
            self.cursor.set_position(usize::MAX);
        }
        result.transpose()
    }
}

/// Parse a whole token list without evaluating anything.
///
/// Stops at the first error.
pub fn parse(tokens: &TokenList) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).collect()
}
