//! Maps a node id back to the character range of its definition block in the
//! raw document text.
//!
//! This is deliberately a textual heuristic, not a YAML parse: it operates
//! on indentation and colon-terminated keys only, so it keeps working on
//! malformed or half-edited documents. Offsets are byte offsets into the
//! text, half-open, suitable for a flat-range selection API.

use serde::Serialize;

/// Half-open byte range in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text covered by this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// A bare mapping key: word characters followed by a colon, nothing else.
/// The input must already be trimmed.
fn is_bare_key(trimmed: &str) -> bool {
    match trimmed.strip_suffix(':') {
        Some(key) => !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Finds the definition block of `node_id` in the raw document text.
///
/// The match is the first line whose trimmed content is exactly
/// `"{node_id}:"` with at least two columns of indentation (node keys always
/// sit nested under the `nodes:` mapping). The span starts at column 0 of
/// that line and extends line by line until the hierarchy closes (a line
/// indented less than the node line) or a sibling key appears at the same
/// indentation, whichever comes first; blank lines never terminate it. If
/// neither boundary occurs the span runs to end of document.
///
/// Returns `None` when the id does not occur; the caller leaves its current
/// selection untouched in that case.
pub fn locate(text: &str, node_id: &str) -> Option<SourceSpan> {
    let needle = format!("{}:", node_id);
    let lines: Vec<&str> = text.split('\n').collect();

    let start_line = lines
        .iter()
        .position(|line| indent_width(line) >= 2 && line.trim() == needle)?;
    let node_indent = indent_width(lines[start_line]);

    let mut end_line = start_line + 1;
    for (i, line) in lines.iter().enumerate().skip(start_line + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            end_line = i + 1;
            continue;
        }
        let line_indent = indent_width(line);
        if line_indent < node_indent {
            end_line = i;
            break;
        }
        if line_indent == node_indent && is_bare_key(trimmed) {
            end_line = i;
            break;
        }
        end_line = i + 1;
    }

    let start: usize = lines[..start_line].iter().map(|l| l.len() + 1).sum();

    let mut end = start;
    for i in start_line..end_line {
        end += lines[i].len();
        // The trailing newline of the last included line belongs to the
        // span only when more content follows it.
        if i < end_line - 1 || end_line < lines.len() {
            end += 1;
        }
    }

    Some(SourceSpan { start, end })
}
