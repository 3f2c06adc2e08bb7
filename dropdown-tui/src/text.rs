//! Column widths of terminal text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Columns `c` occupies; control characters count as zero.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to `max_width` columns, ending in `…` when anything was dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}

/// The last `max_width` columns of `s` (keeps the end of a long query in
/// view while typing).
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    let start = s
        .char_indices()
        .rev()
        .take_while(|&(_, c)| {
            used += char_width(c);
            used <= max_width
        })
        .last()
        .map_or(s.len(), |(i, _)| i);
    &s[start..]
}
