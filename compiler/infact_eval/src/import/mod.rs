//! Import path resolution and cycle detection.
//!
//! A relative import is tried next to the importing file first, then as
//! written (relative to the working directory). Absolute imports are used
//! as-is. Files are identified by their lexically normalized path.

use std::path::{Component, Path, PathBuf};

/// Deepest allowed chain of nested imports.
pub const MAX_IMPORT_DEPTH: usize = 256;

/// Paths to try for `import "<target>";` written in `importer`, in order.
///
/// `importer` is `None` for sources that are not files. Identical
/// candidates are listed once.
pub fn candidates(target: &str, importer: Option<&Path>) -> Vec<PathBuf> {
    let target_path = Path::new(target);
    if target_path.is_absolute() {
        return vec![target_path.to_path_buf()];
    }

    let mut paths = Vec::with_capacity(2);
    if let Some(dir) = importer
        .and_then(Path::parent)
        .filter(|dir| normalize_path(dir) != Path::new("."))
    {
        paths.push(dir.join(target_path));
    }
    let as_given = target_path.to_path_buf();
    if !paths
        .iter()
        .any(|p| normalize_path(p) == normalize_path(&as_given))
    {
        paths.push(as_given);
    }
    paths
}

/// Normalize a path without touching the filesystem.
///
/// Drops `.` components and folds `..` into the preceding component.
/// Leading `..` components (and `..` directly under the root) are kept
/// as written.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// The cycle closed by importing `path`, if `stack` already holds it.
///
/// Returns the chain from the first occurrence through `path` again.
pub fn find_cycle(stack: &[PathBuf], path: &Path) -> Option<Vec<PathBuf>> {
    let start = stack.iter().position(|p| p == path)?;
    let mut chain = stack[start..].to_vec();
    chain.push(path.to_path_buf());
    Some(chain)
}

/// `a -> b -> a`
pub fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
