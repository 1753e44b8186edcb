// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the configdoc-search command-line interface.
//!
//! Three subcommands: `index` to build a payload from schema definitions,
//! `inspect` to examine a payload, and `search` to query one the way the
//! site's search box does.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "configdoc-search",
    about = "Keyword search index builder for configuration documentation",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search payload from a directory of schema definitions
    Index {
        /// Input directory containing manifest.json and schema files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for search-index.json
        #[arg(short, long)]
        output: PathBuf,

        /// Search script template to render into search.js
        ///
        /// The template must contain the /*__SCHEMA_INDEX__*/ and
        /// /*__KEYWORD_INDEX__*/ placeholders.
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Inspect a search payload
    Inspect {
        /// Path to search-index.json
        file: PathBuf,
    },

    /// Search a payload and display results
    Search {
        /// Path to search-index.json
        file: PathBuf,

        /// Search term, as typed into the search box
        query: String,

        /// Maximum number of schemas to list
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
}
