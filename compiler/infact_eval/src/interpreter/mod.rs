//! The statement evaluator.
//!
//! An `Interpreter` owns one `Environment` for its whole life. Each
//! `eval_*` call lexes a source, then alternates between parsing one
//! statement and executing it. Imports evaluate the imported file in place,
//! against the same environment, before the next statement is parsed.
//!
//! Errors abort the current `eval_*` call. Bindings made before the error
//! stay in the environment.

mod exec;
mod import_guard;
mod resolve;
mod source;

use std::io::Read;
use std::path::{Path, PathBuf};

use infact_parse::Parser;
use tracing::debug;

use crate::environment::{Environment, GetError, Slot};
use crate::errors::{EvalError, EvalErrorKind};
use crate::factory::Factory;
use crate::import::normalize_path;
use crate::loader::{FsLoader, SourceLoader};
use crate::value::FromValue;

use source::Source;

pub struct Interpreter {
    env: Environment,
    factory: Box<dyn Factory>,
    loader: Box<dyn SourceLoader>,
    /// Normalized paths of the files being evaluated, outermost first.
    import_stack: Vec<PathBuf>,
}

impl Interpreter {
    /// An interpreter that reads files from disk.
    pub fn new(factory: impl Factory + 'static) -> Self {
        Interpreter::with_loader(factory, FsLoader)
    }

    pub fn with_loader(
        factory: impl Factory + 'static,
        loader: impl SourceLoader + 'static,
    ) -> Self {
        Interpreter {
            env: Environment::new(),
            factory: Box::new(factory),
            loader: Box::new(loader),
            import_stack: Vec::new(),
        }
    }

    /// Replace the source loader used by later `eval_file` calls and imports.
    pub fn set_loader(&mut self, loader: impl SourceLoader + 'static) {
        self.loader = Box::new(loader);
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn factory(&self) -> &dyn Factory {
        self.factory.as_ref()
    }

    /// Read variable `name` as a `T`.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, GetError> {
        self.env.get_typed(name)
    }

    /// Read several variables at once, stopping at the first failure.
    pub fn get_many(&self, slots: &mut [Slot<'_>]) -> Result<(), GetError> {
        self.env.get_many(slots)
    }

    /// Evaluate the file at `path`.
    pub fn eval_file(&mut self, path: impl AsRef<Path>) -> Result<(), EvalError> {
        self.eval_path(path.as_ref())
    }

    /// Evaluate `text`. Relative imports resolve against the working directory.
    pub fn eval_str(&mut self, text: &str) -> Result<(), EvalError> {
        self.eval_source(&Source::anonymous("<string>", text.to_string()))
    }

    /// Evaluate everything `reader` yields.
    pub fn eval_reader(&mut self, mut reader: impl Read) -> Result<(), EvalError> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|source| {
            EvalError::new(EvalErrorKind::Io {
                path: "<stream>".to_string(),
                source,
            })
        })?;
        self.eval_source(&Source::anonymous("<stream>", text))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(path = %path.display()))]
    fn eval_path(&mut self, path: &Path) -> Result<(), EvalError> {
        let text = self.read_source(path).map_err(|source| {
            EvalError::new(EvalErrorKind::Io {
                path: path.display().to_string(),
                source,
            })
        })?;
        let source = Source::file(path, text);
        self.importing(normalize_path(path)).eval_source(&source)
    }

    fn read_source(&self, path: &Path) -> std::io::Result<String> {
        let mut text = String::new();
        self.loader.open(path)?.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Parse and execute `source` one statement at a time.
    fn eval_source(&mut self, source: &Source) -> Result<(), EvalError> {
        let tokens = infact_lexer::lex(source.text());
        let mut parser = Parser::new(&tokens);
        let mut count = 0usize;

        while let Some(stmt) = parser.next_statement().map_err(|err| {
            let span = err.span;
            source.error(span, EvalErrorKind::Parse(err))
        })? {
            self.exec(source, &stmt)?;
            count += 1;
        }

        debug!(source = source.name(), statements = count, "evaluated");
        Ok(())
    }
}
