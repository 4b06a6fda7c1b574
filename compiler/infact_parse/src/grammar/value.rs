//! Value expression parsing.
//!
//! ```text
//! value    ::= literal | '{' [ value (',' value)* ] '}' | 'null'
//!            | name | type_name '(' [ arg (',' arg)* ] ')'
//! arg      ::= param_name '(' value ')'
//! ```
//!
//! Vector elements must not themselves be vector literals. Whether an
//! element list is homogeneous is decided at evaluation time, once
//! references have values.

use infact_ir::{Arg, Expr, ExprKind, Literal, SpecExpr, TokenKind};

use super::stmt::check_plain_name;
use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse a value expression.
    ///
    /// Construction arguments nest, so this goes through
    /// `ensure_sufficient_stack`.
    pub(crate) fn parse_value(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_value_inner())
    }

    fn parse_value_inner(&mut self) -> Result<Expr, ParseError> {
        let span = self.cursor.current_span();
        let literal = match self.cursor.current_kind() {
            TokenKind::Bool(value) => Literal::Bool(*value),
            TokenKind::Int(value) => Literal::Int(*value),
            TokenKind::Double(bits) => Literal::Double(f64::from_bits(*bits)),
            TokenKind::Str(value) => Literal::Str(value.clone()),
            TokenKind::LBrace => return self.parse_list(),
            TokenKind::Ident(name) => {
                if matches!(self.cursor.peek_next_kind(), TokenKind::LParen) {
                    return self.parse_spec();
                }
                self.cursor.advance();
                if name == "null" {
                    return Ok(Expr::new(ExprKind::Null, span));
                }
                check_plain_name(name, span)?;
                return Ok(Expr::new(ExprKind::Ref(name.clone()), span));
            }
            _ => return Err(self.cursor.unexpected("a value")),
        };
        self.cursor.advance();
        Ok(Expr::new(ExprKind::Literal(literal), span))
    }

    /// `{ v1, v2, ... }`
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut items = Vec::new();

        if !self.cursor.check(&TokenKind::RBrace) {
            loop {
                let item = self.parse_value()?;
                if matches!(item.kind, ExprKind::List(_)) {
                    return Err(ParseError::new(ParseErrorKind::NestedVector, item.span));
                }
                items.push(item);
                if self.cursor.check(&TokenKind::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }

        let end = self.cursor.expect(&TokenKind::RBrace)?.span;
        Ok(Expr::new(ExprKind::List(items), start.merge(end)))
    }

    /// `TypeName(param(value), ...)`
    fn parse_spec(&mut self) -> Result<Expr, ParseError> {
        let (type_name, start) = self.cursor.expect_ident("type name")?;
        if type_name.ends_with("[]") {
            return Err(ParseError::new(
                ParseErrorKind::InvalidType(type_name.to_string()),
                start,
            ));
        }
        self.cursor.expect(&TokenKind::LParen)?;
        let mut args: Vec<Arg> = Vec::new();

        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                let arg = self.parse_arg()?;
                if args.iter().any(|prev| prev.name == arg.name) {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateArgument {
                            type_name: type_name.to_string(),
                            param: arg.name,
                        },
                        arg.span,
                    ));
                }
                args.push(arg);
                if self.cursor.check(&TokenKind::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }

        let end = self.cursor.expect(&TokenKind::RParen)?.span;
        Ok(Expr::new(
            ExprKind::Spec(SpecExpr {
                type_name: type_name.to_string(),
                args,
            }),
            start.merge(end),
        ))
    }

    /// `param(value)`
    fn parse_arg(&mut self) -> Result<Arg, ParseError> {
        let (name, start) = self.cursor.expect_ident("parameter name")?;
        check_plain_name(name, start)?;
        self.cursor.expect(&TokenKind::LParen)?;
        let value = self.parse_value()?;
        let end = self.cursor.expect(&TokenKind::RParen)?.span;
        Ok(Arg {
            name: name.to_string(),
            value,
            span: start.merge(end),
        })
    }
}
