// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `configdoc-search index` pipeline.
//!
//! ```text
//! input/
//! ├── manifest.json        {"version": 1, "schemas": ["a.json", ...]}
//! ├── a.json               {"name": "...", "properties": [...]}
//! └── ...
//!            │
//!            ▼
//! output/
//! ├── search-index.json    {"schemaIndex": [...], "keywordIndex": {...}}
//! └── search.js            only with --template
//! ```

pub mod keywords;
pub mod manifest;
pub mod module;
pub mod parallel;
pub mod tokenize;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub use keywords::*;
pub use manifest::*;
pub use module::*;
pub use parallel::*;
pub use tokenize::tokenize;

/// File name of the JSON payload written by [`run_build`].
pub const PAYLOAD_FILE: &str = "search-index.json";
/// File name of the rendered search script written by [`run_build`].
pub const MODULE_FILE: &str = "search.js";

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub schema_count: usize,
    pub keyword_count: usize,
    pub files: Vec<PathBuf>,
}

/// Read the manifest in `input_dir`, build the payload, write it to `output_dir`.
///
/// With a `template`, the rendered search script is written next to it. An
/// empty manifest still produces both files, with empty tables.
pub fn run_build(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    template: Option<&Path>,
) -> Result<BuildSummary> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    // 1. Read manifest
    let manifest = read_manifest(&input_dir.join("manifest.json"))?;

    // 2. Load schema definitions
    let schemas = load_schemas(input_dir, &manifest)?;
    tracing::info!(count = schemas.len(), "loaded schema definitions");

    if schemas.is_empty() {
        tracing::warn!("no schemas listed in manifest; writing an empty index");
    }

    // 3. Build payload
    let payload = build_payload(&schemas);

    // 4. Write outputs
    fs::create_dir_all(output_dir).map_err(|source| Error::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();

    let payload_path = output_dir.join(PAYLOAD_FILE);
    write_file(&payload_path, &serde_json::to_string(&payload)?)?;
    files.push(payload_path);

    if let Some(template_path) = template {
        let template = fs::read_to_string(template_path).map_err(|source| Error::Read {
            path: template_path.to_path_buf(),
            source,
        })?;
        let module_path = output_dir.join(MODULE_FILE);
        write_file(&module_path, &render_search_module(&template, &payload)?)?;
        files.push(module_path);
    }

    let summary = BuildSummary {
        schema_count: payload.schema_index.len(),
        keyword_count: payload.keyword_index.len(),
        files,
    };
    tracing::info!(
        schemas = summary.schema_count,
        keywords = summary.keyword_count,
        output = %output_dir.display(),
        "wrote search index"
    );

    Ok(summary)
}

/// Parse `manifest.json`, rejecting versions this builder doesn't know.
pub fn read_manifest(path: &Path) -> Result<InputManifest> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: InputManifest = serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(Error::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }

    Ok(manifest)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
