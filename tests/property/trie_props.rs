//! Trie invariants against a brute-force scan of the inserted keywords.

use configdoc_search::Trie;
use proptest::prelude::*;

/// Short words over a small alphabet, so random keywords share prefixes.
fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(keyword_strategy(), 0..30)
}

/// Oracle: distinct keywords in first-insertion order that start with `prefix`.
fn oracle_search<'a>(keywords: &'a [String], prefix: &str) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .iter()
        .map(String::as_str)
        .filter(|k| seen.insert(*k))
        .filter(|k| k.starts_with(prefix))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every inserted keyword is found by searching for itself.
    #[test]
    fn prop_search_finds_inserted_keyword(keywords in vocabulary_strategy()) {
        let trie: Trie = keywords.iter().collect();
        for keyword in &keywords {
            prop_assert!(trie.search(keyword).contains(&keyword.as_str()));
            prop_assert!(trie.contains(keyword));
        }
    }

    /// Every prefix of an inserted keyword leads to that keyword.
    #[test]
    fn prop_every_prefix_reaches_keyword(keywords in vocabulary_strategy()) {
        let trie: Trie = keywords.iter().collect();
        for keyword in &keywords {
            let chars: Vec<char> = keyword.chars().collect();
            for end in 0..=chars.len() {
                let prefix: String = chars[..end].iter().collect();
                prop_assert!(
                    trie.search(&prefix).contains(&keyword.as_str()),
                    "prefix {:?} lost keyword {:?}", prefix, keyword
                );
            }
        }
    }

    /// Search equals a linear scan, order included.
    #[test]
    fn prop_search_matches_oracle(
        keywords in vocabulary_strategy(),
        prefix in prop::string::string_regex("[abcd]{0,4}").unwrap(),
    ) {
        let trie: Trie = keywords.iter().collect();
        prop_assert_eq!(trie.search(&prefix), oracle_search(&keywords, &prefix));
    }

    /// A prefix no keyword starts with yields nothing.
    #[test]
    fn prop_absent_prefix_is_empty(keywords in vocabulary_strategy()) {
        let trie: Trie = keywords.iter().collect();
        prop_assert!(trie.search("d").is_empty());
        prop_assert!(trie.search("abcabcd").is_empty());
    }

    /// Inserting the same vocabulary twice changes nothing.
    #[test]
    fn prop_insert_is_idempotent(keywords in vocabulary_strategy()) {
        let once: Trie = keywords.iter().collect();
        let mut twice = once.clone();
        twice.extend(keywords.iter());

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        for prefix in ["", "a", "ab", "b", "cc"] {
            prop_assert_eq!(once.search(prefix), twice.search(prefix));
        }
    }

    /// No keyword appears twice in any result.
    #[test]
    fn prop_results_have_no_duplicates(
        keywords in vocabulary_strategy(),
        prefix in prop::string::string_regex("[abc]{0,3}").unwrap(),
    ) {
        let trie: Trie = keywords.iter().collect();
        let result = trie.search(&prefix);
        let unique: std::collections::HashSet<_> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());
    }
}
