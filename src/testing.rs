//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::search::PrefixSearchIndex;
use crate::types::{KeywordTable, SchemaRecord, SchemaTable};

/// Create a schema record with the generator's default page path.
pub fn make_schema(name: &str) -> SchemaRecord {
    SchemaRecord::new(name, format!("schema.{}.html", name))
}

/// Schema table `Schema0..SchemaN`.
pub fn make_schemas(count: usize) -> SchemaTable {
    (0..count).map(|i| make_schema(&format!("Schema{}", i))).collect()
}

/// Keyword table from `(keyword, positions)` pairs, in the order given.
pub fn make_keywords(entries: &[(&str, &[usize])]) -> KeywordTable {
    entries
        .iter()
        .map(|(keyword, ids)| (keyword.to_string(), ids.to_vec()))
        .collect()
}

/// Index over named schemas and keyword entries.
pub fn make_index(schema_names: &[&str], entries: &[(&str, &[usize])]) -> PrefixSearchIndex {
    let schemas: SchemaTable = schema_names.iter().map(|name| make_schema(name)).collect();
    PrefixSearchIndex::new(schemas, make_keywords(entries))
}
