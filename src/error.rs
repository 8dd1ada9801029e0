use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised by the text composition engine.
///
/// Every variant is detected while the edit is still staged in memory; the
/// input text is never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// No line of the source contains the anchor substring.
    AnchorNotFound { anchor: String },
    /// The source lacks a structural marker the edit depends on.
    MalformedSource { reason: &'static str },
    /// The source already carries the output of a prior composition pass.
    DuplicateComposition { marker: &'static str },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::AnchorNotFound { anchor } => {
                write!(f, "no line contains the anchor `{}`", anchor)
            }
            ComposeError::MalformedSource { reason } => {
                write!(f, "malformed source: {}", reason)
            }
            ComposeError::DuplicateComposition { marker } => {
                write!(
                    f,
                    "source already contains `{}`; refusing to inject the composition twice",
                    marker
                )
            }
        }
    }
}

impl std::error::Error for ComposeError {}

/// Error raised by the generator commands built on top of the engine.
#[derive(Debug)]
pub enum GenerateError {
    /// A composition edit failed for the named class.
    Compose { class: String, source: ComposeError },
    /// The model a composition targets does not exist on disk.
    ModelNotFound { class: String, known: Vec<String> },
    /// The collection named with `-c` does not exist on disk.
    CollectionNotFound { class: String },
    /// The target class file already exists and `--force` was not given.
    ClassExists { path: PathBuf },
    /// Reading or writing a project file failed.
    Io { path: PathBuf, source: io::Error },
}

impl GenerateError {
    /// Render the error for the terminal (no color).
    pub fn render(&self) -> String {
        let mut output = format!("error: {}\n", self);
        if let Some(help) = self.help() {
            output.push_str(&format!(" help: {}\n", help));
        }
        output
    }

    /// Render the error with ANSI color codes.
    pub fn render_color(&self) -> String {
        let mut output = format!("\x1b[1;31merror\x1b[0m: \x1b[1m{}\x1b[0m\n", self);
        if let Some(help) = self.help() {
            output.push_str(&format!(" \x1b[1;38;5;73mhelp:\x1b[0m {}\n", help));
        }
        output
    }

    fn help(&self) -> Option<String> {
        match self {
            GenerateError::ModelNotFound { known, .. } if !known.is_empty() => {
                Some(format!("known models: {}", known.join(", ")))
            }
            GenerateError::ClassExists { .. } => Some("pass --force to overwrite".to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Compose { class, source } => write!(f, "{}: {}", class, source),
            GenerateError::ModelNotFound { class, .. } => write!(f, "model {} not found", class),
            GenerateError::CollectionNotFound { class } => {
                write!(f, "collection {} not found", class)
            }
            GenerateError::ClassExists { path } => {
                write!(f, "{} already exists", path.display())
            }
            GenerateError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Compose { source, .. } => Some(source),
            GenerateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
