//! Class name qualification under the project's root namespace.

/// Namespace separator in qualified PHP names.
pub const SEPARATOR: char = '\\';

/// Answers whether a conventional sub-namespace directory exists in the
/// project layout — the one seam where name resolution consults the
/// filesystem collaborator.
pub trait DirectoryProbe {
    fn has_dir(&self, segment: &str) -> bool;
}

/// The kinds of generated classes and their conventional directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Model,
    Collection,
    QueryBuilder,
}

impl ClassKind {
    /// Conventional directory (and namespace segment) for this kind.
    pub fn directory(self) -> &'static str {
        match self {
            ClassKind::Model => "Models",
            ClassKind::Collection => "Collections",
            ClassKind::QueryBuilder => "QueryBuilders",
        }
    }
}

/// Resolves short or partial class names into fully qualified ones.
pub struct Qualifier<'p> {
    root: String,
    probe: &'p dyn DirectoryProbe,
}

impl<'p> Qualifier<'p> {
    pub fn new(root_namespace: &str, probe: &'p dyn DirectoryProbe) -> Self {
        Self {
            root: root_namespace.trim_matches(SEPARATOR).to_string(),
            probe,
        }
    }

    /// The root namespace, without a trailing separator.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Fully qualify `name` under the root namespace, injecting the
    /// conventional sub-namespace for `kind` when the project layout has it.
    ///
    /// Runs as a bounded loop rather than recursion: each pass prepends a
    /// root-prefixed segment, so the prefix check flips after at most one
    /// injection.
    pub fn qualify(&self, name: &str, kind: ClassKind) -> String {
        let mut name = name.trim_start_matches(['\\', '/']).replace('/', "\\");
        let prefix = format!("{}{}", self.root, SEPARATOR);

        while !name.starts_with(&prefix) {
            let sub = self.sub_namespace(kind);
            // The selector must hand back a root-prefixed namespace, or the
            // prefix check could never flip.
            debug_assert!(sub == self.root || sub.starts_with(&prefix));
            name = format!("{}{}{}", sub, SEPARATOR, name);
        }
        name
    }

    /// `root\<Dir>` when the layout has the conventional directory for
    /// `kind`, the bare root otherwise.
    pub fn sub_namespace(&self, kind: ClassKind) -> String {
        if self.probe.has_dir(kind.directory()) {
            format!("{}{}{}", self.root, SEPARATOR, kind.directory())
        } else {
            self.root.clone()
        }
    }
}

/// Last segment of a (possibly) qualified name.
pub fn class_basename(name: &str) -> &str {
    name.rsplit(['\\', '/']).next().unwrap_or(name)
}

/// Namespace portion of a qualified name: everything before the basename.
pub fn namespace_of(qualified: &str) -> &str {
    match qualified.rfind(SEPARATOR) {
        Some(index) => &qualified[..index],
        None => "",
    }
}

/// StudlyCase form of `name`, the naming convention for generated classes.
pub fn studly(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            upper_next = true;
        } else if upper_next {
            output.extend(c.to_uppercase());
            upper_next = false;
        } else {
            output.push(c);
        }
    }
    output
}
