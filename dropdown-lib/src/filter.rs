//! Search filter.
//!
//! A plain case-insensitive substring scan, recomputed on every query
//! change. An active query searches the *whole* list, not just the loaded
//! window.

use crate::item::{Item, value_text};

/// Indices of the items to show for `query`.
///
/// Empty query: the first `window_len` items, unfiltered. Otherwise every
/// item in `data` with at least one field whose text contains the query,
/// in list order.
pub fn filter_view(data: &[Item], window_len: usize, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..window_len.min(data.len())).collect();
    }

    let needle = query.to_lowercase();
    data.iter()
        .enumerate()
        .filter(|(_, item)| matches(item, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Whether any field of `item` contains `needle`, which must already be
/// lowercase.
pub fn matches(item: &Item, needle: &str) -> bool {
    item.values()
        .any(|value| value_text(value).to_lowercase().contains(needle))
}
