//! Value expressions.

use std::fmt;

use crate::Span;

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
///
/// `Ref` and `Spec` never reach the environment: references are resolved
/// and specs are constructed while the statement is evaluated.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// `{ a, b, ... }`, possibly empty.
    List(Vec<Expr>),
    /// `null`
    Null,
    /// A variable name in value position.
    Ref(String),
    /// `TypeName(param(value), ...)`
    Spec(SpecExpr),
}

/// Primitive literal.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
}

/// An unresolved construction request.
#[derive(Clone, PartialEq, Debug)]
pub struct SpecExpr {
    pub type_name: String,
    /// Arguments in source order. Names are unique.
    pub args: Vec<Arg>,
}

impl SpecExpr {
    pub fn arg(&self, name: &str) -> Option<&Arg> {
        self.args.iter().find(|arg| arg.name == name)
    }
}

/// One `name(value)` argument of a construction spec.
#[derive(Clone, PartialEq, Debug)]
pub struct Arg {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}
