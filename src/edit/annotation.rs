use lazy_static::lazy_static;
use regex::Regex;

use super::insert;
use crate::error::ComposeError;

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

lazy_static! {
    // A doc block followed, after optional whitespace, by the class keyword.
    static ref ANNOTATED_CLASS: Regex = Regex::new(r"(?s)/\*\*.*?\*/\s*class").unwrap();
}

/// Render `props` as a doc block: one ` * <prop>` line per property.
pub fn create_annotation(props: &[String]) -> String {
    let lines: Vec<String> = props.iter().map(|prop| format!(" * {}", prop)).collect();
    format!("/**\n{}\n */", lines.join("\n"))
}

/// Create a class doc block, or merge `props` into the existing one.
///
/// Without a block, a fresh one is inserted above the class declaration. With
/// one, the whole span from `/**` through `*/` is rebuilt with the union of
/// existing and new properties (first-seen order, exact duplicates dropped),
/// so re-running with the same `props` is byte-identical.
pub fn append_or_create_annotation(
    text: &str,
    props: &[String],
) -> Result<String, ComposeError> {
    match class_annotation_span(text) {
        Some((open, close)) => {
            let inner = &text[open + OPEN.len()..close];
            let mut merged = extract_props(inner);
            for prop in props {
                if !merged.iter().any(|existing| existing == prop) {
                    merged.push(prop.clone());
                }
            }
            let block = create_annotation(&merged);
            Ok(format!(
                "{}{}{}",
                &text[..open],
                block,
                &text[close + CLOSE.len()..]
            ))
        }
        None => insert::insert_before(text, "class", &[create_annotation(props)]),
    }
}

/// Span of the first doc block, when one annotates the class declaration.
/// Returns the byte offsets of the opening and closing delimiters.
fn class_annotation_span(text: &str) -> Option<(usize, usize)> {
    if !ANNOTATED_CLASS.is_match(text) {
        return None;
    }
    let open = text.find(OPEN)?;
    let close = text[open..].find(CLOSE).map(|offset| open + offset)?;
    Some((open, close))
}

/// Property lines inside a doc block's inner text: the `*` prefix and one
/// following space are stripped, empties and duplicates dropped.
fn extract_props(inner: &str) -> Vec<String> {
    let mut props = Vec::new();
    for line in inner.lines() {
        let rest = match line.trim_start().strip_prefix('*') {
            Some(rest) => rest,
            None => continue,
        };
        let prop = rest.strip_prefix(' ').unwrap_or(rest);
        if prop.is_empty() || props.iter().any(|existing: &String| existing.as_str() == prop) {
            continue;
        }
        props.push(prop.to_string());
    }
    props
}
