//! Cleanup of generated answers before they are stored or shown.
//!
//! The chat widget renders plain text, so markdown emphasis shows up as
//! literal symbols. Stripped: `*` (bold/italic), `__` (bold) and leading
//! `#` heading markers. Kept: list markers, numbering, single underscores
//! and line breaks, which read fine as plain text.

/// Removes emphasis and heading markup from generated text.
///
/// Idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize_response(text: &str) -> String {
    let mut current = single_pass(text);
    // Removing one marker can expose another (e.g. "__# Title"), so repeat
    // until nothing changes. Each changing pass strictly shortens the text.
    loop {
        let next = single_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn single_pass(text: &str) -> String {
    let without_emphasis = text.replace('*', "").replace("__", "");

    let mut out = String::with_capacity(without_emphasis.len());
    for (i, line) in without_emphasis.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_heading(line));
    }
    out
}

fn strip_heading(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        line.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
    } else {
        line
    }
}
