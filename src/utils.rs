// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Normalize a keyword or query term: lowercase, then trim both ends.
///
/// This is the only text transformation applied anywhere in the index. No
/// stemming, no splitting, no whitespace collapsing inside the term:
/// - "  Alpha " → "alpha"
/// - "Max Players" → "max players"
///
/// The trimmed set matches `String.prototype.trim` in browsers (Unicode
/// whitespace plus the byte order mark), so a payload normalizes the same
/// way here and in the page that embeds it.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim_matches(is_trim_char).to_string()
}

/// Whether `value` is already in normalized form.
pub fn is_normalized(value: &str) -> bool {
    normalize(value) == value
}

fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
