// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for payload deserialization.
//!
//! Arbitrary bytes must either fail to parse or produce a payload that
//! builds an index and answers queries without panicking.

#![no_main]

use configdoc_search::{PrefixSearchIndex, SearchPayload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<SearchPayload>(data) else {
        return;
    };

    // Round-trip keeps keyword order
    let json = serde_json::to_string(&payload).expect("payload serializes");
    let reparsed: SearchPayload = serde_json::from_str(&json).expect("payload reparses");
    assert_eq!(payload, reparsed);

    let index = PrefixSearchIndex::from_payload(payload);
    let report = index.validate();
    let all = index.query("");
    assert!(all.count() + report.unreferenced.len() <= index.schemas().len());
});
