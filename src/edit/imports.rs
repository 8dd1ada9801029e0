use lazy_static::lazy_static;
use regex::Regex;

use super::insert;
use crate::error::ComposeError;

lazy_static! {
    static ref IMPORT_LINE: Regex = Regex::new(r"use (.*);").unwrap();
}

/// Names already imported by `text`, in order of discovery.
pub fn existing_imports(text: &str) -> Vec<String> {
    IMPORT_LINE
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Add a `use` line for every candidate not yet imported.
///
/// Candidates keep their input order; a candidate already present in `text`
/// (or repeated within `candidates`) is skipped, so re-running with the same
/// set returns the input unchanged.
pub fn add_imports(text: &str, candidates: &[String]) -> Result<String, ComposeError> {
    if !text.contains("namespace") {
        return Err(ComposeError::MalformedSource {
            reason: "no namespace declaration",
        });
    }

    let existing = existing_imports(text);
    let mut seen: Vec<&String> = Vec::new();
    let mut missing = Vec::new();
    for name in candidates {
        if existing.contains(name) || seen.contains(&name) {
            continue;
        }
        seen.push(name);
        missing.push(format!("use {};", name));
    }

    if missing.is_empty() {
        return Ok(text.to_string());
    }
    insert::insert_after(text, "namespace", &missing)
}
