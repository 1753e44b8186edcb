// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split configuration identifiers into searchable words.
//!
//! Config keys are written every way: `maxPlayers`, `max-players`,
//! `max_players`, `HTTPServer`. Users type words. A term boundary sits at:
//!
//! - any character that isn't a letter or digit (dropped),
//! - a lowercase letter followed by an uppercase one (`max|Players`),
//! - the last capital of an acronym followed by lowercase (`HTTP|Server`).
//!
//! Digits stick to whatever precedes them (`v2Config` stays one token).

/// Split `value` into lowercase word tokens.
pub fn tokenize(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut buffer, &mut tokens);
            continue;
        }
        if !buffer.is_empty() && starts_word(&chars, i) {
            flush(&mut buffer, &mut tokens);
        }
        buffer.push(c);
    }
    flush(&mut buffer, &mut tokens);

    tokens
}

/// Whether a new word begins at `chars[i]`. Requires `i > 0`.
fn starts_word(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let cur = chars[i];

    if prev.is_lowercase() && cur.is_uppercase() {
        return true;
    }

    prev.is_uppercase()
        && cur.is_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

fn flush(buffer: &mut String, tokens: &mut Vec<String>) {
    if !buffer.is_empty() {
        tokens.push(buffer.to_lowercase());
        buffer.clear();
    }
}
