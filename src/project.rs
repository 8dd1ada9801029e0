//! Project layout: the filesystem collaborator around the engine.

use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::naming::{DirectoryProbe, Qualifier};
use crate::paths::PathResolver;
use crate::stubs::Stub;

/// A Laravel-style project the generator operates on: a base directory with
/// an `app/` source root and an optional `stubs/` override directory.
#[derive(Debug, Clone)]
pub struct Project {
    base: PathBuf,
    root_namespace: String,
}

impl Project {
    pub fn new(base: impl Into<PathBuf>, root_namespace: &str) -> Self {
        Self {
            base: base.into(),
            root_namespace: root_namespace.trim_matches('\\').to_string(),
        }
    }

    /// Root namespace, without a trailing separator.
    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// The application source root, `<base>/app`.
    pub fn app_path(&self) -> PathBuf {
        self.base.join("app")
    }

    /// Name resolver bound to this project's layout.
    pub fn qualifier(&self) -> Qualifier<'_> {
        Qualifier::new(&self.root_namespace, self)
    }

    /// Path mapper for qualified class names.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.root_namespace, self.app_path(), "php")
    }

    /// Path of the class file for `qualified`.
    pub fn class_path(&self, qualified: &str) -> PathBuf {
        self.resolver().path_for(qualified)
    }

    /// Path a stub override would live at.
    pub fn stub_path(&self, stub: Stub) -> PathBuf {
        self.base.join("stubs").join(stub.file_name())
    }

    /// Stub content: a project override under `stubs/` wins over the
    /// embedded default.
    pub fn stub(&self, stub: Stub) -> io::Result<String> {
        let override_path = self.stub_path(stub);
        if override_path.is_file() {
            fs::read_to_string(&override_path)
        } else {
            Ok(stub.default_content().to_string())
        }
    }

    /// Read a class file by qualified name.
    pub fn read_class(&self, qualified: &str) -> io::Result<String> {
        fs::read_to_string(self.class_path(qualified))
    }

    /// Write a class file by qualified name, creating parent directories.
    pub fn write_class(&self, qualified: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.class_path(qualified);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Model class stems found under `app/Models`, for not-found hints.
    pub fn model_names(&self) -> Vec<String> {
        let models_dir = self.app_path().join("Models");
        let mut names: Vec<String> = WalkDir::new(models_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "php"))
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(String::from)
            })
            .collect();
        names.sort();
        names
    }
}

impl DirectoryProbe for Project {
    fn has_dir(&self, segment: &str) -> bool {
        self.app_path().join(segment).is_dir()
    }
}
