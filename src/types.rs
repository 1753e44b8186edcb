// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tables a search payload is made of, and what a query hands back.
//!
//! A payload is two literal structures emitted by the documentation generator:
//!
//! ```text
//! schemaIndex:  [ {name, path}, {name, path}, ... ]      addressed by position
//! keywordIndex: { "keyword": [schema positions], ... }   keyed by normalized term
//! ```
//!
//! # Invariants
//!
//! - **SchemaTable**: immutable after load; positions are stable.
//! - **KeywordTable**: key order is payload order. Each index list holds no
//!   repeated position and keeps first-occurrence order. Positions are NOT
//!   checked against the schema table here; dangling ones are skipped at query
//!   time and reported by `PrefixSearchIndex::validate`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position of a schema in the [`SchemaTable`].
pub type SchemaId = usize;

/// A documented configuration object: display name plus a relative link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub name: String,
    pub path: String,
}

impl SchemaRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered, position-addressed schema records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaTable(Vec<SchemaRecord>);

impl SchemaTable {
    pub fn new(records: Vec<SchemaRecord>) -> Self {
        Self(records)
    }

    /// Record at `id`, or `None` for a dangling reference.
    #[inline]
    pub fn get(&self, id: SchemaId) -> Option<&SchemaRecord> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaRecord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SchemaRecord] {
        &self.0
    }
}

impl From<Vec<SchemaRecord>> for SchemaTable {
    fn from(records: Vec<SchemaRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<SchemaRecord> for SchemaTable {
    fn from_iter<I: IntoIterator<Item = SchemaRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SchemaTable {
    type Item = &'a SchemaRecord;
    type IntoIter = std::slice::Iter<'a, SchemaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Keyword → schema positions, in payload order.
///
/// Backed by an entry list plus a lookup map rather than a hash map alone:
/// the order keys were written in drives trie insertion order, which in turn
/// is the order matched keywords come back in.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<(String, Vec<SchemaId>)>,
    lookup: HashMap<String, usize>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add positions for `keyword`.
    ///
    /// A keyword seen before keeps its original slot and absorbs the new
    /// positions; a position already listed is not repeated.
    pub fn insert(&mut self, keyword: impl Into<String>, ids: impl IntoIterator<Item = SchemaId>) {
        let keyword = keyword.into();
        let slot = match self.lookup.get(&keyword) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.lookup.insert(keyword.clone(), slot);
                self.entries.push((keyword, Vec::new()));
                slot
            }
        };

        let list = &mut self.entries[slot].1;
        for id in ids {
            if !list.contains(&id) {
                list.push(id);
            }
        }
    }

    /// Positions for `keyword`, or `None` if the keyword is not in the table.
    #[inline]
    pub fn get(&self, keyword: &str) -> Option<&[SchemaId]> {
        self.lookup
            .get(keyword)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_key(&self, keyword: &str) -> bool {
        self.lookup.contains_key(keyword)
    }

    /// Keys in payload order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(keyword, _)| keyword.as_str())
    }

    /// `(keyword, positions)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SchemaId])> + '_ {
        self.entries
            .iter()
            .map(|(keyword, ids)| (keyword.as_str(), ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for KeywordTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for KeywordTable {}

impl<K: Into<String>, I: IntoIterator<Item = SchemaId>> FromIterator<(K, I)> for KeywordTable {
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut table = KeywordTable::new();
        for (keyword, ids) in iter {
            table.insert(keyword, ids);
        }
        table
    }
}

impl Serialize for KeywordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, ids) in &self.entries {
            map.serialize_entry(keyword, ids)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeywordTableVisitor;

        impl<'de> Visitor<'de> for KeywordTableVisitor {
            type Value = KeywordTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from keyword to a list of schema positions")
            }

            // Entries arrive in document order, which is what we keep.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = KeywordTable::new();
                while let Some((keyword, ids)) = access.next_entry::<String, Vec<SchemaId>>()? {
                    table.insert(keyword, ids);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(KeywordTableVisitor)
    }
}

/// The document exchanged between the builder and the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub schema_index: SchemaTable,
    pub keyword_index: KeywordTable,
}

/// What a query hands back to the UI.
///
/// Borrows from the index. Serializes as `{count, keywords, schemas}`, the
/// object the search panel renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Matched schemas, first-occurrence order, no repeats.
    pub schemas: Vec<&'a SchemaRecord>,
    /// Every keyword sharing the query prefix, in trie order.
    pub keywords: Vec<&'a str>,
}

impl QueryResult<'_> {
    /// Number of matched schemas.
    pub fn count(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.keywords.is_empty()
    }

    /// Matched keywords joined the way the search panel shows them.
    pub fn keyword_summary(&self) -> String {
        self.keywords.join(",")
    }

    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.name.as_str()).collect()
    }
}

impl Serialize for QueryResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("QueryResult", 3)?;
        out.serialize_field("count", &self.count())?;
        out.serialize_field("keywords", &self.keywords)?;
        out.serialize_field("schemas", &self.schemas)?;
        out.end()
    }
}

/// Findings from checking a payload for references a query would skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadReport {
    /// `(keyword, position)` pairs pointing past the end of the schema table.
    pub dangling: Vec<(String, SchemaId)>,
    /// Keys that change under normalization and so can never be matched.
    pub unnormalized: Vec<String>,
    /// Schemas no keyword points at.
    pub unreferenced: Vec<SchemaId>,
}

impl PayloadReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.unnormalized.is_empty() && self.unreferenced.is_empty()
    }
}

pub(crate) fn unreferenced_schemas(schemas: &SchemaTable, keywords: &KeywordTable) -> Vec<SchemaId> {
    let referenced: HashSet<SchemaId> = keywords
        .iter()
        .flat_map(|(_, ids)| ids.iter().copied())
        .collect();
    (0..schemas.len()).filter(|id| !referenced.contains(id)).collect()
}
