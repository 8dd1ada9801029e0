//! Qualified name to logical file path mapping.

use std::path::PathBuf;

use crate::naming::SEPARATOR;

/// Maps fully qualified class names onto the project's source tree.
///
/// Pure mapping, no I/O; whether the file exists is the caller's concern.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root_namespace: String,
    source_root: PathBuf,
    extension: String,
}

impl PathResolver {
    pub fn new(root_namespace: &str, source_root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root_namespace: root_namespace.trim_matches(SEPARATOR).to_string(),
            source_root: source_root.into(),
            extension: extension.to_string(),
        }
    }

    /// File path for `qualified`: the root-namespace prefix is stripped once
    /// from the front, remaining separators become path segments, and the
    /// extension is appended.
    pub fn path_for(&self, qualified: &str) -> PathBuf {
        let prefix = format!("{}{}", self.root_namespace, SEPARATOR);
        let relative = qualified.strip_prefix(&prefix).unwrap_or(qualified);

        let mut path = self.source_root.clone();
        for segment in relative.split(SEPARATOR) {
            path.push(segment);
        }
        path.set_extension(&self.extension);
        path
    }
}
