//! Evaluation errors.
//!
//! Every failure while evaluating a source is an `EvalError`: a kind, the
//! place it happened and the chain of imports that led there.
//!
//! ```text
//! conf/b.infact:3:9: undefined variable `dims`
//!   imported from conf/a.infact:1
//!   imported from main.infact:4
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use infact_ir::Type;
use infact_parse::ParseError;

use crate::factory::ConstructError;
use crate::import::format_chain;

#[derive(Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Where the error happened; `None` when no source was read yet.
    pub location: Option<Location>,
    /// Import statements leading to the failing file, innermost first.
    pub imported_from: Vec<ImportFrame>,
}

/// A position in a named source. Columns count characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// The `import` statement through which a failing file was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportFrame {
    pub file: String,
    pub line: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum EvalErrorKind {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("cannot construct `{type_name}`: {source}")]
    Construct {
        type_name: String,
        #[source]
        source: ConstructError,
    },

    #[error("cannot assign {found} to `{name}` of type {expected}")]
    TypeMismatch {
        name: String,
        expected: Type,
        found: String,
    },

    #[error("cannot infer the type of `{name}` from {from}; add a type specifier")]
    CannotInfer { name: String, from: &'static str },

    #[error("vector elements must share one type, found {first} and {found}")]
    MixedVector { first: String, found: String },

    #[error("vector of {expected} cannot hold {found}")]
    ElementMismatch { expected: Type, found: String },

    #[error("vector element `{0}` is itself a vector")]
    NestedVector(String),

    #[error("cannot read import `{path}` (tried {})", quote_all(.candidates))]
    ImportUnreadable {
        path: String,
        candidates: Vec<PathBuf>,
    },

    #[error("import cycle: {}", format_chain(.0))]
    ImportCycle(Vec<PathBuf>),

    #[error("imports nested more than {0} files deep")]
    ImportTooDeep(usize),

    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn quote_all(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("`{}`", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            location: None,
            imported_from: Vec::new(),
        }
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Record that the failing file was imported from `file` at `line`.
    #[must_use]
    pub fn imported_from(mut self, file: impl Into<String>, line: u32) -> Self {
        self.imported_from.push(ImportFrame {
            file: file.into(),
            line,
        });
        self
    }

    /// The message without location or import context.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}:{}:{}: ", loc.file, loc.line, loc.column)?;
        }
        write!(f, "{}", self.kind)?;
        for frame in &self.imported_from {
            write!(f, "\n  imported from {}:{}", frame.file, frame.line)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}
