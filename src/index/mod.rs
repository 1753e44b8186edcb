// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the prefix tree the query path walks.

pub mod trie;

pub use trie::*;
