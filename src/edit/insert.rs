use crate::error::ComposeError;

/// Where inserted blocks land relative to the anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Byte spans of each line in `text`, terminators excluded.
/// `\n`, `\r\n` and `\r` each close one line.
fn line_spans(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                spans.push((start, i));
                i += 1;
                start = i;
            }
            b'\r' => {
                spans.push((start, i));
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    spans.push((start, bytes.len()));
    spans
}

/// Insert `blocks` at the first line containing `anchor` as a substring.
///
/// Only the anchor line's span is rewritten; every other byte of `text` is
/// preserved verbatim. `Placement::After` leaves a blank line between the
/// anchor and the inserted text — that spacing is part of the contract.
pub fn insert_first(
    text: &str,
    anchor: &str,
    blocks: &[String],
    placement: Placement,
) -> Result<String, ComposeError> {
    for (start, end) in line_spans(text) {
        let line = &text[start..end];
        if !line.contains(anchor) {
            continue;
        }

        let joined = blocks.join("\n");
        let replacement = match placement {
            Placement::Before => format!("{}\n{}", joined, line),
            Placement::After => format!("{}\n\n{}", line, joined),
        };

        let mut output = String::with_capacity(text.len() + replacement.len());
        output.push_str(&text[..start]);
        output.push_str(&replacement);
        output.push_str(&text[end..]);
        return Ok(output);
    }

    Err(ComposeError::AnchorNotFound {
        anchor: anchor.to_string(),
    })
}

/// Insert `blocks` directly above the first line containing `anchor`.
pub fn insert_before(text: &str, anchor: &str, blocks: &[String]) -> Result<String, ComposeError> {
    insert_first(text, anchor, blocks, Placement::Before)
}

/// Insert `blocks` below the first line containing `anchor`, separated by a
/// blank line.
pub fn insert_after(text: &str, anchor: &str, blocks: &[String]) -> Result<String, ComposeError> {
    insert_first(text, anchor, blocks, Placement::After)
}
