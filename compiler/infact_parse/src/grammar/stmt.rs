//! Statement parsing.
//!
//! ```text
//! statement ::= 'import' string_lit ';'
//!             | [ type_spec ] name '=' value ';'
//! type_spec ::= ident | ident '[' ']'
//! ```
//!
//! A type specifier is recognized by lookahead alone: two identifiers (or
//! an identifier, `[]`, and an identifier) before the `=`.

use infact_ir::{Span, Stmt, StmtKind, TokenKind, Type};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.current_kind().is_ident("import") {
            self.parse_import()
        } else {
            self.parse_assignment()
        }
    }

    /// `import "path";`
    fn parse_import(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let (path, path_span) = match self.cursor.current_kind() {
            TokenKind::Str(path) => (path.clone(), self.cursor.advance().span),
            _ => return Err(self.cursor.unexpected("string literal after `import`")),
        };
        let end = self.cursor.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::new(
            StmtKind::Import { path, path_span },
            start.merge(end),
        ))
    }

    /// `[type] name = value;`
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let (first, first_span) = self.cursor.expect_ident("type or variable name")?;

        let (ty, name, name_span) = match self.cursor.current_kind() {
            TokenKind::Eq => (None, first, first_span),
            TokenKind::Ident(_) => {
                let ty = parse_type(first, first_span)?;
                let (name, span) = self.cursor.expect_ident("variable name")?;
                (Some(ty), name, span)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let close = self.cursor.expect(&TokenKind::RBracket)?.span;
                let ty = parse_type(&format!("{first}[]"), first_span.merge(close))?;
                let (name, span) = self.cursor.expect_ident("variable name")?;
                (Some(ty), name, span)
            }
            _ => return Err(self.cursor.unexpected("`=` or a variable name")),
        };
        check_plain_name(name, name_span)?;

        self.cursor.expect(&TokenKind::Eq)?;
        let value = self.parse_value()?;
        let end = self.cursor.expect(&TokenKind::Semicolon)?.span;

        Ok(Stmt::new(
            StmtKind::Assign {
                ty,
                name: name.to_string(),
                name_span,
                value,
            },
            first_span.merge(end),
        ))
    }
}

fn parse_type(spec: &str, span: Span) -> Result<Type, ParseError> {
    Type::from_specifier(spec)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidType(spec.to_string()), span))
}

/// Variable and parameter names cannot carry a `[]` suffix, and `null`
/// always means the null value.
pub(crate) fn check_plain_name(name: &str, span: Span) -> Result<(), ParseError> {
    if name.ends_with("[]") || name == "null" {
        Err(ParseError::new(
            ParseErrorKind::InvalidName(name.to_string()),
            span,
        ))
    } else {
        Ok(())
    }
}
