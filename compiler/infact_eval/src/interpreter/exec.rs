//! Statement execution: assignments and imports.

use std::io::Read;
use std::path::PathBuf;

use infact_ir::{Expr, Span, Stmt, StmtKind, Type};
use infact_parse::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::{Interpreter, Source};
use crate::errors::{EvalError, EvalErrorKind};
use crate::import::{candidates, find_cycle, normalize_path, MAX_IMPORT_DEPTH};

impl Interpreter {
    pub(super) fn exec(&mut self, source: &Source, stmt: &Stmt) -> Result<(), EvalError> {
        match &stmt.kind {
            StmtKind::Import { path, path_span } => {
                self.exec_import(source, path, *path_span, stmt.span)
            }
            StmtKind::Assign {
                ty, name, value, ..
            } => self.exec_assign(source, ty.as_ref(), name, value),
        }
    }

    fn exec_assign(
        &mut self,
        source: &Source,
        declared: Option<&Type>,
        name: &str,
        expr: &Expr,
    ) -> Result<(), EvalError> {
        let resolved = match declared {
            Some(declared) => self.resolve_as(source, expr, declared)?,
            None => self.resolve(source, expr)?,
        };

        let (value, ty) = match declared {
            Some(declared) => {
                let value = resolved.value.coerce_to(declared).ok_or_else(|| {
                    source.error(
                        expr.span,
                        EvalErrorKind::TypeMismatch {
                            name: name.to_string(),
                            expected: declared.clone(),
                            found: resolved.describe(),
                        },
                    )
                })?;
                (value, declared.clone())
            }
            None => match resolved.ty {
                Some(ty) => (resolved.value, ty),
                None => {
                    return Err(source.error(
                        expr.span,
                        EvalErrorKind::CannotInfer {
                            name: name.to_string(),
                            from: resolved.untyped_origin(),
                        },
                    ))
                }
            },
        };

        debug!(name, ty = %ty, "bind");
        self.env.bind(name, value, ty);
        Ok(())
    }

    /// `import "target";`
    ///
    /// Finds the first readable candidate, refuses cycles, then evaluates
    /// the file in place.
    fn exec_import(
        &mut self,
        source: &Source,
        target: &str,
        path_span: Span,
        stmt_span: Span,
    ) -> Result<(), EvalError> {
        let candidates = candidates(target, source.path());

        let mut opened: Option<(PathBuf, Box<dyn Read>)> = None;
        for candidate in &candidates {
            match self.loader.open(candidate) {
                Ok(reader) => {
                    opened = Some((candidate.clone(), reader));
                    break;
                }
                Err(err) => {
                    trace!(candidate = %candidate.display(), %err, "import candidate unusable");
                }
            }
        }
        let Some((resolved, mut reader)) = opened else {
            return Err(source.error(
                path_span,
                EvalErrorKind::ImportUnreadable {
                    path: target.to_string(),
                    candidates,
                },
            ));
        };

        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|err| {
            source.error(
                path_span,
                EvalErrorKind::Io {
                    path: resolved.display().to_string(),
                    source: err,
                },
            )
        })?;

        let key = normalize_path(&resolved);
        if let Some(chain) = find_cycle(&self.import_stack, &key) {
            return Err(source.error(path_span, EvalErrorKind::ImportCycle(chain)));
        }
        if self.import_stack.len() >= MAX_IMPORT_DEPTH {
            return Err(source.error(
                path_span,
                EvalErrorKind::ImportTooDeep(MAX_IMPORT_DEPTH),
            ));
        }

        debug!(
            import = target,
            resolved = %resolved.display(),
            depth = self.import_stack.len(),
            "import"
        );
        let imported = Source::file(&resolved, text);
        let line = source.line(stmt_span.start);

        ensure_sufficient_stack(|| self.importing(key).eval_source(&imported))
            .map_err(|err| err.imported_from(source.name(), line))
    }
}
