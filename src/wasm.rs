// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the documentation site.
//!
//! The page constructs one `SchemaSearch` from the embedded payload and calls
//! `search()` on every keystroke:
//!
//! ```js
//! const search = new SchemaSearch({ schemaIndex, keywordIndex });
//! const { count, keywords, schemas } = search.search(input.value);
//! ```

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::search::PrefixSearchIndex;
use crate::types::SearchPayload;

/// WASM-accessible prefix search index.
#[wasm_bindgen]
pub struct SchemaSearch {
    index: PrefixSearchIndex,
}

#[wasm_bindgen]
impl SchemaSearch {
    /// Build the index from a `{schemaIndex, keywordIndex}` object.
    #[wasm_bindgen(constructor)]
    pub fn new(payload: JsValue) -> Result<SchemaSearch, JsValue> {
        let payload: SearchPayload = from_value(payload).map_err(|e| e.to_string())?;
        Ok(SchemaSearch {
            index: PrefixSearchIndex::from_payload(payload),
        })
    }

    /// Search for a raw input string.
    pub fn search(&self, term: &str) -> Result<JsValue, JsValue> {
        to_value(&self.index.query(term)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = schemaCount)]
    pub fn schema_count(&self) -> usize {
        self.index.schemas().len()
    }

    #[wasm_bindgen(js_name = keywordCount)]
    pub fn keyword_count(&self) -> usize {
        self.index.keywords().len()
    }
}
