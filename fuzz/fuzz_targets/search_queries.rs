// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary keyword tables (dangling positions included) and arbitrary query
//! strings. The query must never panic and never list a schema twice.

#![no_main]

use arbitrary::Arbitrary;
use configdoc_search::{KeywordTable, PrefixSearchIndex, SchemaRecord, SchemaTable};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct Input {
    schema_count: u8,
    entries: Vec<(String, Vec<u8>)>,
    query: String,
}

fuzz_target!(|input: Input| {
    let schemas: SchemaTable = (0..input.schema_count as usize % 32)
        .map(|i| SchemaRecord::new(format!("S{}", i), format!("s{}.html", i)))
        .collect();
    let keywords: KeywordTable = input
        .entries
        .into_iter()
        .map(|(keyword, ids)| (keyword, ids.into_iter().map(usize::from)))
        .collect();
    let index = PrefixSearchIndex::new(schemas, keywords);

    let result = index.query(&input.query);

    // No schema twice
    let mut seen = HashSet::new();
    for schema in &result.schemas {
        assert!(seen.insert(&schema.name), "duplicate schema {}", schema.name);
    }

    // Every matched keyword starts with the normalized query
    let term = configdoc_search::normalize(&input.query);
    for keyword in &result.keywords {
        assert!(keyword.starts_with(&term), "{:?} does not start with {:?}", keyword, term);
    }

    // Case never changes the match set
    let upper = index.query(&input.query.to_uppercase());
    if configdoc_search::normalize(&input.query.to_uppercase()) == term {
        assert_eq!(upper, result);
    }
});
