//! infact IR - shared data structures for the infact interpreter.
//!
//! This crate contains the types every stage agrees on:
//! - Spans and line tables for source locations
//! - Tokens and `TokenList` for lexer output
//! - `Type` specifiers (`int`, `string[]`, `Model`, ...)
//! - The statement tree produced by the parser (`Stmt`, `Expr`, `SpecExpr`)
//!
//! Nothing here evaluates anything; the runtime value model lives in
//! `infact_eval`.

pub mod ast;
mod span;
mod token;
mod ty;

pub use ast::{Arg, Expr, ExprKind, Literal, SpecExpr, Stmt, StmtKind};
pub use span::{LineTable, Span};
pub use token::{LexErrorKind, Token, TokenKind, TokenList};
pub use ty::{ScalarType, Type};
