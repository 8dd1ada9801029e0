//! Source-file composition engine for Laravel-style PHP projects.
//!
//! Scaffolds Eloquent `Collection` and query `Builder` companion classes from
//! stub templates and composes them into an existing model class: `use`
//! imports are injected after the namespace declaration, `newCollection()` /
//! `newEloquentBuilder()` overrides are appended to the class body, and
//! `@method` lines are merged into the class doc block. Every edit is a
//! line-anchored text transformation — no PHP parser is involved — so inputs
//! are ordinary single-class source files carrying a `namespace` declaration.
//!
//! The engine itself is pure: text in, text out, with all failures detected
//! before anything is written. Filesystem concerns (project layout, stub
//! overrides, reading and writing class files) live in [`Project`] and
//! [`Generator`], which the `compose` binary drives.

pub mod compose;
pub mod edit;
pub mod error;
pub mod generate;
pub mod naming;
pub mod paths;
pub mod project;
pub mod stubs;

pub use error::{ComposeError, GenerateError};
pub use generate::{FileAction, GeneratedFile, Generator};
pub use naming::{ClassKind, DirectoryProbe, Qualifier};
pub use paths::PathResolver;
pub use project::Project;
