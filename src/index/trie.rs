// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree over normalized keywords.
//!
//! Every node carries the full list of keywords that pass through it, so a
//! prefix lookup is a walk down `prefix.chars()` followed by reading one list.
//! No subtree traversal at query time. The price is memory: each keyword is
//! referenced once per character, which is fine for documentation-sized
//! vocabularies (a few thousand terms).
//!
//! ```text
//!            (root) {alpha, alphabet, beta}
//!            /                      \
//!          'a' {alpha, alphabet}    'b' {beta}
//!           |                        |
//!          ...                      ...
//!          'a'* {alpha, alphabet}   'a'* {beta}
//!           |
//!          'b' {alphabet}
//!          ...
//! ```
//!
//! Keywords are stored once in an insertion-ordered vocabulary; nodes hold
//! positions into it. A node's list is in the order keywords first reached
//! that node, which is the order `search` returns them in.
//!
//! Nodes live in one flat arena and link to children by position. Nothing
//! recurses per character, so keyword length is bounded only by memory.
//!
//! # Invariants
//!
//! - A node's list is exactly the set of inserted keywords having the node's
//!   path as prefix. The root's path is empty, so it lists everything.
//! - A node is terminal iff some inserted keyword ends exactly there.
//! - Lists only grow; no keyword appears twice in one list.
//! - `nodes[ROOT]` is the root; every child position is in bounds.

use std::collections::HashMap;

/// Position of a keyword in the trie's vocabulary.
pub type KeywordId = usize;

/// Position of a node in the trie's arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// One character step in the trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: HashMap<char, NodeId>,
    keywords: Vec<KeywordId>,
    terminal: bool,
}

impl TrieNode {
    /// Arena position of the child reached by `c`.
    #[inline]
    pub fn child_id(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// True iff a keyword ends exactly at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Vocabulary positions of the keywords passing through this node.
    pub fn keyword_ids(&self) -> &[KeywordId] {
        &self.keywords
    }
}

/// Character trie mapping prefixes to the keywords that start with them.
///
/// Built once by repeated [`insert`](Trie::insert), then only read.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    vocabulary: Vec<String>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            vocabulary: Vec::new(),
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-normalized keyword.
    ///
    /// The keyword is recorded at the root and at every node along its path,
    /// and the last node is marked terminal. Inserting a keyword that is
    /// already present is a no-op. The empty keyword ends at the root.
    pub fn insert(&mut self, keyword: &str) {
        if self.contains(keyword) {
            return;
        }

        let id = self.vocabulary.len();
        self.vocabulary.push(keyword.to_string());

        let mut current = ROOT;
        self.nodes[current].keywords.push(id);
        for c in keyword.chars() {
            current = match self.nodes[current].child_id(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(c, next);
                    next
                }
            };
            self.nodes[current].keywords.push(id);
        }
        self.nodes[current].terminal = true;
    }

    /// Every inserted keyword that starts with `prefix`.
    ///
    /// `prefix` is taken as-is; normalize it first. A character with no
    /// matching child ends the walk with an empty result. The empty prefix
    /// matches every keyword.
    pub fn search(&self, prefix: &str) -> Vec<&str> {
        match self.find(prefix) {
            Some(node) => node
                .keywords
                .iter()
                .map(|&id| self.vocabulary[id].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether `keyword` was inserted as a complete keyword.
    pub fn contains(&self, keyword: &str) -> bool {
        self.find(keyword).is_some_and(TrieNode::is_terminal)
    }

    /// Node reached by walking `prefix`, if the path exists.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(self.root(), |node, c| self.child(node, c))
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// Child of `node` reached by `c`.
    #[inline]
    pub fn child(&self, node: &TrieNode, c: char) -> Option<&TrieNode> {
        node.child_id(c).and_then(|id| self.nodes.get(id))
    }

    /// Children of `node` with the character leading to each.
    pub fn children<'a>(
        &'a self,
        node: &'a TrieNode,
    ) -> impl Iterator<Item = (char, &'a TrieNode)> + 'a {
        node.children
            .iter()
            .filter_map(move |(&c, &id)| self.nodes.get(id).map(|child| (c, child)))
    }

    /// Keyword at vocabulary position `id`.
    pub fn keyword(&self, id: KeywordId) -> Option<&str> {
        self.vocabulary.get(id).map(String::as_str)
    }

    /// All keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.vocabulary.iter().map(String::as_str)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Total nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(keyword.as_ref());
        }
    }
}
