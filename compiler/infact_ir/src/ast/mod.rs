//! Statement tree produced by the parser.
//!
//! A source is a flat list of statements. The parser hands them out one at
//! a time so that imports can run before later statements are parsed.
//!
//! # Module Structure
//!
//! - `stmt`: `import` and assignment statements
//! - `expr`: value expressions (literals, vectors, references, construction specs)

mod expr;
mod stmt;

pub use expr::{Arg, Expr, ExprKind, Literal, SpecExpr};
pub use stmt::{Stmt, StmtKind};
