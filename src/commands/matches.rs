//! Dictionary queries
//!
//! Neighbor lookups, reachability checks and random walks over the graph.

use crate::graph::{Reachability, WordGraph};
use crate::sampling::Sampler;
use rand::Rng;

/// Neighbors of a single word
pub struct MatchesResult {
    pub word: String,
    pub found: bool,
    pub matches: Vec<String>,
    /// Size of the word's connected component, including itself
    pub component_size: usize,
}

/// Look up every word one letter away from `word`
#[must_use]
pub fn find_word_matches(graph: &WordGraph, word: &str) -> MatchesResult {
    let word = word.to_ascii_uppercase();
    let Some(id) = graph.find_node(&word) else {
        return MatchesResult {
            word,
            found: false,
            matches: Vec::new(),
            component_size: 0,
        };
    };

    let mut matches: Vec<String> = graph
        .find_matches(&word)
        .iter()
        .map(|w| w.text().to_string())
        .collect();
    matches.sort();

    MatchesResult {
        word,
        found: true,
        matches,
        component_size: graph.connectivity().component_size(graph.component(id)),
    }
}

/// Reachability of one pair of words
pub struct ReachResult {
    pub first: String,
    pub second: String,
    pub reachability: Reachability,
}

#[must_use]
pub fn check_reachability(graph: &WordGraph, first: &str, second: &str) -> ReachResult {
    ReachResult {
        first: first.to_ascii_uppercase(),
        second: second.to_ascii_uppercase(),
        reachability: graph.is_reachable(first, second),
    }
}

/// A random walk rendered as words
pub struct WalkResult {
    pub words: Vec<String>,
}

/// Pick a random starting word and wander from it
///
/// Returns `None` only when the graph is empty.
pub fn random_walk<R: Rng>(
    graph: &WordGraph,
    sampler: &mut Sampler<R>,
    length: Option<usize>,
    steps: usize,
) -> Option<WalkResult> {
    let start = sampler.random_word(graph, length)?;
    let walk = sampler.random_walk(graph, start, steps);
    Some(WalkResult {
        words: walk
            .path
            .iter()
            .map(|&id| graph.word(id).text().to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> WordGraph {
        WordGraph::from_strs(&["CAT", "COT", "COG", "DOG", "DOT", "ZZZ"]).unwrap()
    }

    #[test]
    fn matches_of_cot() {
        let result = find_word_matches(&small_graph(), "cot");
        assert!(result.found);
        assert_eq!(result.word, "COT");
        assert_eq!(result.matches, vec!["CAT", "COG", "DOT"]);
        assert_eq!(result.component_size, 5);
    }

    #[test]
    fn matches_of_unknown_word() {
        let result = find_word_matches(&small_graph(), "QQQ");
        assert!(!result.found);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn isolated_word_has_no_matches() {
        let result = find_word_matches(&small_graph(), "ZZZ");
        assert!(result.found);
        assert!(result.matches.is_empty());
        assert_eq!(result.component_size, 1);
    }

    #[test]
    fn reachability_results() {
        let graph = small_graph();
        let r = check_reachability(&graph, "cat", "dog");
        assert!(r.reachability.possible);
        assert_eq!(r.first, "CAT");

        let r = check_reachability(&graph, "CAT", "ZZZ");
        assert!(!r.reachability.possible);
        assert!(r.reachability.both_valid);
    }

    #[test]
    fn random_walk_is_a_ladder() {
        let graph = small_graph();
        let mut sampler = Sampler::seeded(4);
        let walk = random_walk(&graph, &mut sampler, Some(3), 4).unwrap();

        assert!(!walk.words.is_empty());
        assert!(walk.words.len() <= 5);
        for pair in walk.words.windows(2) {
            let a = graph.find_node(&pair[0]).unwrap();
            let b = graph.find_node(&pair[1]).unwrap();
            assert!(graph.neighbors(a).contains(&b));
        }
    }
}
