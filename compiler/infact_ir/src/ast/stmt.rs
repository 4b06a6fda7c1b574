//! Statement types.

use std::fmt;

use super::Expr;
use crate::{Span, Type};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// From the first token of the statement through its `;`.
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `import "path";`
    Import { path: String, path_span: Span },

    /// `[type] name = value;`
    Assign {
        ty: Option<Type>,
        name: String,
        name_span: Span,
        value: Expr,
    },
}
