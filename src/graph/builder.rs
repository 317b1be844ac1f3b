//! Word graph construction and queries
//!
//! Adjacency is discovered through wildcard buckets: every word is filed under
//! each of its one-position-blanked keys, and two words are neighbors exactly
//! when they share a bucket. This costs the sum of squared bucket sizes rather
//! than a comparison of every word against every other.

use super::components::{ConnectivityIndex, Reachability};
use super::node::{ComponentId, Node, NodeId};
use crate::core::{WildcardKey, Word, WordError};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// Immutable graph of dictionary words joined by one-letter changes
///
/// Built once, then shared read-only by any number of solver queries.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    nodes: Vec<Node>,
    index: FxHashMap<Word, NodeId>,
    connectivity: ConnectivityIndex,
    edge_count: usize,
}

impl WordGraph {
    /// Build a graph keeping neighbors in dictionary order
    ///
    /// Duplicate words are ignored after their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::graph::WordGraph;
    ///
    /// let words = ["CAT", "COT", "COG", "DOG", "DOT"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap());
    /// let graph = WordGraph::build(words);
    ///
    /// assert_eq!(graph.len(), 5);
    /// assert!(graph.is_reachable("CAT", "DOG").possible);
    /// ```
    pub fn build(words: impl IntoIterator<Item = Word>) -> Self {
        Self::assemble(words, |_| {})
    }

    /// Build a graph with each neighbor list shuffled by `rng`
    ///
    /// Depth-first search explores neighbors in list order; shuffling keeps it
    /// from always diving down the same long corridor first.
    pub fn build_shuffled<R: Rng + ?Sized>(
        words: impl IntoIterator<Item = Word>,
        rng: &mut R,
    ) -> Self {
        Self::assemble(words, |neighbors| neighbors.shuffle(&mut *rng))
    }

    /// Build from raw strings
    ///
    /// # Errors
    /// Returns the first `WordError` encountered; dictionary filtering is
    /// expected to happen before this point.
    pub fn from_strs<S: AsRef<str>>(words: &[S]) -> Result<Self, WordError> {
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(words))
    }

    fn assemble(
        words: impl IntoIterator<Item = Word>,
        mut arrange: impl FnMut(&mut Vec<NodeId>),
    ) -> Self {
        let mut index: FxHashMap<Word, NodeId> = FxHashMap::default();
        let mut dictionary: Vec<Word> = Vec::new();
        for word in words {
            if !index.contains_key(&word) {
                index.insert(word.clone(), NodeId::new(dictionary.len()));
                dictionary.push(word);
            }
        }

        let buckets = bucket_by_wildcard(&dictionary);
        debug!(
            "Filed {} words into {} wildcard buckets",
            dictionary.len(),
            buckets.len()
        );

        let mut adjacency: Vec<Vec<NodeId>> = dictionary
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let id = NodeId::new(i);
                word.wildcard_keys()
                    .filter_map(|key| buckets.get(&key))
                    .flat_map(|bucket| bucket.iter().copied())
                    .filter(|&other| other != id)
                    .collect()
            })
            .collect();
        drop(buckets);

        for neighbors in &mut adjacency {
            arrange(neighbors);
        }

        let connectivity = ConnectivityIndex::from_adjacency(&adjacency);
        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;

        let nodes: Vec<Node> = dictionary
            .into_iter()
            .zip(adjacency)
            .enumerate()
            .map(|(i, (word, neighbors))| {
                let component = connectivity.component_of(NodeId::new(i));
                Node::new(word, neighbors, component)
            })
            .collect();

        info!(
            "Built word graph: {} words, {} edges, {} components",
            nodes.len(),
            edge_count,
            connectivity.component_count()
        );

        Self {
            nodes,
            index,
            connectivity,
            edge_count,
        }
    }

    /// Number of words in the graph
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All node ids in build order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// # Panics
    /// Panics if `id` did not come from this graph
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// # Panics
    /// Panics if `id` did not come from this graph
    #[inline]
    #[must_use]
    pub fn word(&self, id: NodeId) -> &Word {
        self.node(id).word()
    }

    /// Neighbors of a node, never including the node itself
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).neighbors()
    }

    /// Look up a word (case-insensitive)
    #[must_use]
    pub fn find_node(&self, word: &str) -> Option<NodeId> {
        self.index
            .get(word)
            .or_else(|| self.index.get(word.to_ascii_uppercase().as_str()))
            .copied()
    }

    /// Words one letter away from `word`, empty if the word is unknown
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordGraph;
    ///
    /// let graph = WordGraph::from_strs(&["CAT", "COT", "COG", "DOG", "DOT"]).unwrap();
    /// let mut matches: Vec<String> = graph
    ///     .find_matches("COT")
    ///     .iter()
    ///     .map(|w| w.text().to_string())
    ///     .collect();
    /// matches.sort();
    /// assert_eq!(matches, ["CAT", "COG", "DOT"]);
    /// ```
    #[must_use]
    pub fn find_matches(&self, word: &str) -> Vec<Word> {
        self.find_node(word)
            .map(|id| {
                self.neighbors(id)
                    .iter()
                    .map(|&n| self.word(n).clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All nodes whose word has `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| self.word(id).len() == length)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn component(&self, id: NodeId) -> ComponentId {
        self.node(id).component()
    }

    /// Number of connected components (isolated words count as one each)
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.connectivity.component_count()
    }

    #[must_use]
    pub const fn connectivity(&self) -> &ConnectivityIndex {
        &self.connectivity
    }

    /// Constant-time precheck for whether a ladder can exist
    ///
    /// `both_valid` is false when either word is missing from the graph.
    #[must_use]
    pub fn is_reachable(&self, word1: &str, word2: &str) -> Reachability {
        match (self.find_node(word1), self.find_node(word2)) {
            (Some(a), Some(b)) => Reachability {
                possible: self.connectivity.connected(a, b),
                both_valid: true,
            },
            _ => Reachability::INVALID,
        }
    }

    /// Convert a node path into its words
    #[must_use]
    pub fn words_of(&self, path: &[NodeId]) -> Vec<Word> {
        path.iter().map(|&id| self.word(id).clone()).collect()
    }
}

/// File every word under each of its wildcard keys
fn bucket_by_wildcard(words: &[Word]) -> FxHashMap<WildcardKey, Vec<NodeId>> {
    let mut buckets: FxHashMap<WildcardKey, Vec<NodeId>> = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        for key in word.wildcard_keys() {
            buckets.entry(key).or_default().push(NodeId::new(i));
        }
    }
    buckets
}
