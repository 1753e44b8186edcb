// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel schema loading and term collection.
//!
//! Reading schema files and tokenizing their keys are independent per schema.
//! With the `parallel` feature both run on rayon's pool; without it they run
//! in a plain loop. Either way results come back in manifest order, so the
//! payload is identical.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::keywords::schema_terms;
use super::manifest::{InputManifest, SchemaDefinition};
use crate::error::{Error, Result};

/// Load every schema file listed in the manifest, in manifest order.
pub fn load_schemas(input_dir: &Path, manifest: &InputManifest) -> Result<Vec<SchemaDefinition>> {
    #[cfg(feature = "parallel")]
    let files = manifest.schemas.par_iter();
    #[cfg(not(feature = "parallel"))]
    let files = manifest.schemas.iter();

    files
        .map(|filename| load_schema(&input_dir.join(filename)))
        .collect()
}

/// Read and parse a single schema definition file.
pub fn load_schema(path: &Path) -> Result<SchemaDefinition> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| {
        tracing::warn!(path = %path.display(), "failed to parse schema definition");
        Error::Json {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Normalized search terms per schema, in input order.
pub fn collect_terms(schemas: &[SchemaDefinition]) -> Vec<BTreeSet<String>> {
    #[cfg(feature = "parallel")]
    let terms = schemas.par_iter().map(schema_terms).collect();
    #[cfg(not(feature = "parallel"))]
    let terms = schemas.iter().map(schema_terms).collect();

    terms
}
