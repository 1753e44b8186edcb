//! Empty inputs, empty indexes, odd characters.

use configdoc_search::{KeywordTable, PrefixSearchIndex, SchemaTable};

use crate::common::{foo_bar_index, make_index, make_schemas};

#[test]
fn test_empty_query_matches_every_keyword() {
    let index = foo_bar_index();
    let result = index.query("");
    assert_eq!(result.keywords, vec!["alpha", "alphabet"]);
    assert_eq!(result.schema_names(), vec!["Foo", "Bar"]);
}

#[test]
fn test_blank_query_behaves_like_empty() {
    let index = foo_bar_index();
    assert_eq!(index.query(" \t\n"), index.query(""));
}

#[test]
fn test_empty_index() {
    let index = PrefixSearchIndex::new(SchemaTable::default(), KeywordTable::default());
    assert!(index.query("").is_empty());
    assert!(index.query("anything").is_empty());
    assert_eq!(index.trie().node_count(), 1);
}

#[test]
fn test_keywords_without_schemas() {
    let index = PrefixSearchIndex::new(make_schemas(0), KeywordTable::default());
    assert!(index.query("x").is_empty());

    let index = make_index(&[], &[("orphan", &[0])]);
    let result = index.query("orph");
    assert_eq!(result.keywords, vec!["orphan"]);
    assert!(result.schemas.is_empty());
}

#[test]
fn test_empty_keyword_is_reachable_only_by_empty_query() {
    let index = make_index(&["S0", "S1"], &[("", &[0]), ("beta", &[1])]);
    let all = index.query("");
    assert_eq!(all.keywords, vec!["", "beta"]);
    assert_eq!(all.schema_names(), vec!["S0", "S1"]);

    let b = index.query("b");
    assert_eq!(b.keywords, vec!["beta"]);
    assert_eq!(b.schema_names(), vec!["S1"]);
}

#[test]
fn test_unicode_keywords_match_by_character() {
    let index = make_index(&["S0", "S1"], &[("größe", &[0]), ("grün", &[1])]);
    assert_eq!(index.query("GR").count(), 2);
    assert_eq!(index.query("grö").schema_names(), vec!["S0"]);
    assert_eq!(index.query("GRÜ").schema_names(), vec!["S1"]);
    assert!(index.query("gro").is_empty());
}

#[test]
fn test_very_long_query_is_harmless() {
    let index = foo_bar_index();
    let long = "alpha".repeat(1000);
    assert!(index.query(&long).is_empty());
}

#[test]
fn test_index_is_shareable_across_threads() {
    let index = std::sync::Arc::new(foo_bar_index());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = std::sync::Arc::clone(&index);
            std::thread::spawn(move || index.query("alph").count())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_very_long_keyword_survives_query_clone_and_drop() {
    let long = "a".repeat(100_000);
    let index = make_index(&["S0"], &[(long.as_str(), &[0])]);

    let result = index.query("AAA");
    assert_eq!(result.schema_names(), vec!["S0"]);
    assert_eq!(index.trie().node_count(), 100_001);

    let copy = index.clone();
    drop(index);
    assert_eq!(copy.query(&long).count(), 1);
    drop(copy);
}
