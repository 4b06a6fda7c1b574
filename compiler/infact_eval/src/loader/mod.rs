//! Source provisioning.
//!
//! The interpreter never touches the filesystem directly: it asks a
//! `SourceLoader` to open a path, and a path counts as readable exactly
//! when `open` succeeds.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::import::normalize_path;

pub trait SourceLoader {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// Opens files on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("`{}` is a directory", path.display()),
            ));
        }
        Ok(Box::new(File::open(path)?))
    }
}

/// Serves sources from memory, keyed by lexically normalized path.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        MemoryLoader::default()
    }

    /// Add or replace the file at `path`.
    pub fn insert(&mut self, path: impl AsRef<Path>, text: impl Into<String>) {
        self.files.insert(normalize_path(path.as_ref()), text.into());
    }

    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize_path(path))
    }
}

impl SourceLoader for MemoryLoader {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        match self.files.get(&normalize_path(path)) {
            Some(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file `{}`", path.display()),
            )),
        }
    }
}

impl<L: SourceLoader + ?Sized> SourceLoader for Box<L> {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        (**self).open(path)
    }
}
