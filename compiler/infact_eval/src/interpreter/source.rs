//! A source being evaluated: its text, its name for messages, and its
//! path when it is a file.

use std::path::{Path, PathBuf};

use infact_ir::{LineTable, Span};

use crate::errors::{EvalError, EvalErrorKind, Location};

pub(crate) struct Source {
    name: String,
    path: Option<PathBuf>,
    text: String,
    lines: LineTable,
}

impl Source {
    pub(crate) fn file(path: &Path, text: String) -> Self {
        Source {
            name: path.display().to_string(),
            path: Some(path.to_path_buf()),
            lines: LineTable::build(&text),
            text,
        }
    }

    pub(crate) fn anonymous(name: &str, text: String) -> Self {
        Source {
            name: name.to_string(),
            path: None,
            lines: LineTable::build(&text),
            text,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The file path, which relative imports resolve against.
    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn line(&self, offset: u32) -> u32 {
        self.lines.line(offset)
    }

    /// Source text under `span`, for messages.
    pub(crate) fn snippet(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or_default()
    }

    pub(crate) fn location(&self, span: Span) -> Location {
        let (line, column) = self.lines.line_col(&self.text, span.start);
        Location {
            file: self.name.clone(),
            line,
            column,
        }
    }

    #[cold]
    pub(crate) fn error(&self, span: Span, kind: EvalErrorKind) -> EvalError {
        EvalError::new(kind).at(self.location(span))
    }
}
