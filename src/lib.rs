//! Prefix keyword search for generated configuration documentation.
//!
//! A documentation generator writes a payload of two tables: schema records
//! (`{name, path}`, addressed by position) and keywords (normalized term →
//! schema positions). This crate builds that payload, and searches it with a
//! character trie so every keystroke in the site's search box is a walk down
//! the typed prefix.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   build/     │────▶│   types.rs   │────▶│    search.rs     │
//! │ (schemas →   │     │ (SchemaTable,│     │ (PrefixSearch-   │
//! │  payload)    │     │ KeywordTable)│     │  Index::query)   │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                                                    │
//!                                                    ▼
//!                                           ┌──────────────────┐
//!                                           │  index/trie.rs   │
//!                                           │ (Trie, TrieNode) │
//!                                           └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use configdoc_search::{PrefixSearchIndex, SearchPayload};
//!
//! let payload: SearchPayload = serde_json::from_str(r#"{
//!     "schemaIndex": [{"name": "Foo", "path": "foo.html"}, {"name": "Bar", "path": "bar.html"}],
//!     "keywordIndex": {"alpha": [0], "alphabet": [0, 1]}
//! }"#).unwrap();
//!
//! let index = PrefixSearchIndex::from_payload(payload);
//! let result = index.query("ALPH");
//! assert_eq!(result.count(), 2);
//! assert_eq!(result.keyword_summary(), "alpha,alphabet");
//! ```

// Module declarations
pub mod build;
pub mod error;
pub mod index;
mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{Error, Result};
pub use index::{KeywordId, Trie, TrieNode};
pub use search::PrefixSearchIndex;
pub use types::{
    KeywordTable, PayloadReport, QueryResult, SchemaId, SchemaRecord, SchemaTable, SearchPayload,
};
pub use utils::{is_normalized, normalize};

#[cfg(feature = "wasm")]
pub use wasm::SchemaSearch;
