//! Grammar rules, split by syntactic level.
//!
//! - `stmt`: `import` and assignments, including the type specifier lookahead
//! - `value`: literals, vectors, `null`, references and construction specs

mod stmt;
mod value;
