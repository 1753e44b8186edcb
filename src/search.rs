// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword search over a generated documentation payload.
//!
//! The whole query path:
//!
//! ```text
//! raw term ──normalize──▶ prefix ──trie──▶ matched keywords
//!                                              │
//!                          keyword table ◀─────┘
//!                                │ schema positions (dedup, first seen wins)
//!                                ▼
//!                          schema table ──▶ schema records
//! ```
//!
//! Nothing on this path can fail. A keyword missing from the keyword table,
//! or a position past the end of the schema table, is skipped; the rest of
//! the result is still returned.

use std::collections::HashSet;

use crate::index::Trie;
use crate::types::{
    unreferenced_schemas, KeywordTable, PayloadReport, QueryResult, SchemaTable, SearchPayload,
};
use crate::utils::{is_normalized, normalize};

/// Prefix search index over a schema table and a keyword table.
///
/// Built once from a payload and read-only afterwards, so a shared reference
/// can be queried from any number of threads.
///
/// # Example
///
/// ```
/// use configdoc_search::{KeywordTable, PrefixSearchIndex, SchemaRecord, SchemaTable};
///
/// let schemas = SchemaTable::new(vec![
///     SchemaRecord::new("Foo", "foo.html"),
///     SchemaRecord::new("Bar", "bar.html"),
/// ]);
/// let keywords: KeywordTable = vec![("alpha", vec![0]), ("alphabet", vec![0, 1])]
///     .into_iter()
///     .collect();
///
/// let index = PrefixSearchIndex::new(schemas, keywords);
/// let result = index.query("Alph");
/// assert_eq!(result.keywords, vec!["alpha", "alphabet"]);
/// assert_eq!(result.schema_names(), vec!["Foo", "Bar"]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixSearchIndex {
    schemas: SchemaTable,
    keywords: KeywordTable,
    trie: Trie,
}

impl PrefixSearchIndex {
    /// Build the trie from every key of `keywords`, in table order.
    ///
    /// Keys are normalized before insertion. Generated payloads are already
    /// normalized, so this only matters for hand-written ones.
    pub fn new(schemas: SchemaTable, keywords: KeywordTable) -> Self {
        let mut trie = Trie::new();
        for keyword in keywords.keywords() {
            trie.insert(&normalize(keyword));
        }

        tracing::debug!(
            schemas = schemas.len(),
            keywords = keywords.len(),
            nodes = trie.node_count(),
            "built prefix search index"
        );

        Self {
            schemas,
            keywords,
            trie,
        }
    }

    pub fn from_payload(payload: SearchPayload) -> Self {
        Self::new(payload.schema_index, payload.keyword_index)
    }

    /// Run a search for a raw, user-typed term.
    ///
    /// The term is normalized, every keyword starting with it is collected
    /// from the trie, and each keyword's schemas are appended in order unless
    /// already present. A schema matched through several keywords appears
    /// once, at the position of its first match.
    ///
    /// An empty (or blank) term matches every keyword. Callers that treat
    /// empty input as "clear search" should check for it first.
    pub fn query(&self, raw_term: &str) -> QueryResult<'_> {
        let term = normalize(raw_term);
        let keywords = self.trie.search(&term);

        let mut seen = HashSet::new();
        let mut schemas = Vec::new();

        for keyword in &keywords {
            let Some(ids) = self.keywords.get(keyword) else {
                continue;
            };
            for &id in ids {
                let Some(record) = self.schemas.get(id) else {
                    continue;
                };
                if seen.insert(id) {
                    schemas.push(record);
                }
            }
        }

        QueryResult { schemas, keywords }
    }

    /// Check the payload for references that `query` would silently skip.
    pub fn validate(&self) -> PayloadReport {
        let mut report = PayloadReport::default();

        for (keyword, ids) in self.keywords.iter() {
            if !is_normalized(keyword) {
                report.unnormalized.push(keyword.to_string());
            }
            for &id in ids {
                if self.schemas.get(id).is_none() {
                    report.dangling.push((keyword.to_string(), id));
                }
            }
        }
        report.unreferenced = unreferenced_schemas(&self.schemas, &self.keywords);

        report
    }

    pub fn schemas(&self) -> &SchemaTable {
        &self.schemas
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl From<SearchPayload> for PrefixSearchIndex {
    fn from(payload: SearchPayload) -> Self {
        Self::from_payload(payload)
    }
}
