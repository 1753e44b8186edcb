// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn schema definitions into a search payload.
//!
//! Each schema contributes its own name and every property name, including
//! the keys of nested dictionaries. Each of those contributes itself plus its
//! word tokens, normalized. A term then maps to every schema that produced it.
//!
//! Output is sorted by term and each position list is ascending, so the same
//! definitions always produce the same bytes.

use std::collections::{BTreeMap, BTreeSet};

use super::manifest::{PropertyDefinition, SchemaDefinition};
use super::parallel::collect_terms;
use super::tokenize::tokenize;
use crate::types::{KeywordTable, SchemaId, SchemaTable, SearchPayload};
use crate::utils::normalize;

/// Raw identifiers a schema is findable by: its name and all property names.
pub fn collect_keywords(schema: &SchemaDefinition) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    keywords.insert(schema.name.clone());
    collect_property_names(&schema.properties, &mut keywords);
    keywords
}

fn collect_property_names(properties: &[PropertyDefinition], keywords: &mut BTreeSet<String>) {
    for property in properties {
        keywords.insert(property.name.clone());
        if let Some(dictionary) = &property.schema {
            collect_property_names(&dictionary.properties, keywords);
        }
    }
}

/// Normalized search terms for one schema: each keyword and its tokens.
pub fn schema_terms(schema: &SchemaDefinition) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    for keyword in collect_keywords(schema) {
        terms.insert(normalize(&keyword));
        for token in tokenize(&keyword) {
            terms.insert(normalize(&token));
        }
    }
    terms.remove("");
    terms
}

/// Build the schema table and keyword table for `schemas`, in order.
pub fn build_payload(schemas: &[SchemaDefinition]) -> SearchPayload {
    let terms = collect_terms(schemas);

    let mut postings: BTreeMap<String, Vec<SchemaId>> = BTreeMap::new();
    for (id, schema_terms) in terms.into_iter().enumerate() {
        for term in schema_terms {
            postings.entry(term).or_default().push(id);
        }
    }

    let schema_index: SchemaTable = schemas.iter().map(SchemaDefinition::record).collect();
    let keyword_index: KeywordTable = postings.into_iter().collect();

    tracing::debug!(
        schemas = schema_index.len(),
        keywords = keyword_index.len(),
        "built search payload"
    );

    SearchPayload {
        schema_index,
        keyword_index,
    }
}
