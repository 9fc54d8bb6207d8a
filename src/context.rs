use std::path::{Path, PathBuf};

use crate::error::Result;

/// Read-only description of the project under check.
///
/// `name` is derived from the root's final path segment and drives the
/// project-name, main-app and main-raml checks.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub name: String,
}

impl ProjectContext {
    /// Build a context from a project root path.
    ///
    /// The root is canonicalized so that the derived name is stable no matter
    /// how the path was spelled on the command line (`.`, `../proj/`, ...).
    ///
    /// # Errors
    /// Returns an error if the root does not exist or cannot be resolved.
    pub fn new(root: &Path) -> Result<Self> {
        let root = dunce::canonicalize(root)?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { root, name })
    }

    /// Build a context with an explicit project name.
    #[must_use]
    pub const fn with_name(root: PathBuf, name: String) -> Self {
        Self { root, name }
    }

    /// Root-relative representation of a path, with forward slashes.
    ///
    /// Paths outside the root are returned as-is; issue locations always use
    /// `/` separators so report content is identical across platforms.
    #[must_use]
    pub fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
