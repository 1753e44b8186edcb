//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;

use configdoc_search::build::{build_payload, PropertyDefinition, SchemaDefinition};
use configdoc_search::{PrefixSearchIndex, QueryResult, SearchPayload};

// Re-export canonical test utilities from configdoc_search::testing
pub use configdoc_search::testing::{make_index, make_keywords, make_schema, make_schemas};

/// The two-schema payload used throughout: `alpha → [Foo]`, `alphabet → [Foo, Bar]`.
pub const FOO_BAR_PAYLOAD: &str = r#"{
    "schemaIndex": [
        {"name": "Foo", "path": "foo.html"},
        {"name": "Bar", "path": "bar.html"}
    ],
    "keywordIndex": {"alpha": [0], "alphabet": [0, 1]}
}"#;

pub fn foo_bar_index() -> PrefixSearchIndex {
    let payload: SearchPayload = serde_json::from_str(FOO_BAR_PAYLOAD).expect("valid fixture");
    PrefixSearchIndex::from_payload(payload)
}

/// Schema definitions resembling a game server's configuration docs.
pub fn server_schemas() -> Vec<SchemaDefinition> {
    vec![
        SchemaDefinition::new("ServerConfig")
            .with_property(PropertyDefinition::new("maxPlayers"))
            .with_property(PropertyDefinition::new("motd"))
            .with_property(PropertyDefinition::dictionary(
                "worldSettings",
                vec![
                    PropertyDefinition::new("viewDistance"),
                    PropertyDefinition::new("spawnRadius"),
                ],
            )),
        SchemaDefinition::new("ProxyConfig")
            .with_property(PropertyDefinition::new("maxPlayers"))
            .with_property(PropertyDefinition::new("HTTPTimeout")),
        SchemaDefinition::new("DatabaseConfig")
            .with_property(PropertyDefinition::new("jdbcUrl"))
            .with_property(PropertyDefinition::new("max-pool-size")),
    ]
}

pub fn server_index() -> PrefixSearchIndex {
    PrefixSearchIndex::from_payload(build_payload(&server_schemas()))
}

/// Assert a result lists each schema at most once.
pub fn assert_no_duplicate_schemas(result: &QueryResult<'_>) {
    let mut seen = HashSet::new();
    for schema in &result.schemas {
        assert!(
            seen.insert(schema.name.as_str()),
            "schema {} appears twice in {:?}",
            schema.name,
            result.schema_names()
        );
    }
}
