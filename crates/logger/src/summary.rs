//! crates/logger/src/summary.rs
//! Compact rendering of long lists.

use std::fmt::{Display, Write as _};

use crate::level::DebugLevel;

/// Shortest list that gets summarized.
const SUMMARY_MIN_LEN: usize = 4;

/// Renders `items` as `[a, b, c]`.
#[must_use]
pub fn list_str<T: Display>(items: &[T]) -> String {
    let mut out = String::from("[");
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

/// Renders `items` for debug output at `level`.
///
/// Below level 5, lists of four or more items collapse to
/// `[first-<hidden>-last]`, where `hidden` counts the elided middle items.
#[must_use]
pub fn summarize_list<T: Display>(level: DebugLevel, items: &[T]) -> String {
    match items {
        [first, .., last] if level < DebugLevel::MAX && items.len() >= SUMMARY_MIN_LEN => {
            format!("[{first}-<{}>-{last}]", items.len() - 2)
        }
        _ => list_str(items),
    }
}
