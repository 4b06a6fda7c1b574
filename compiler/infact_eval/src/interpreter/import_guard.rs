//! RAII guard for the import stack.
//!
//! Entering a file pushes its normalized path; dropping the guard pops it,
//! whether evaluation succeeded, failed, or unwound.

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use super::Interpreter;

pub(crate) struct ImportGuard<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for ImportGuard<'_> {
    fn drop(&mut self) {
        self.interpreter.import_stack.pop();
    }
}

impl Deref for ImportGuard<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ImportGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push `path` on the import stack until the returned guard drops.
    pub(crate) fn importing(&mut self, path: PathBuf) -> ImportGuard<'_> {
        self.import_stack.push(path);
        ImportGuard { interpreter: self }
    }
}
