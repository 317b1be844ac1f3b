//! Random words, walks and query pairs
//!
//! The random source is passed in explicitly, so a seeded `StdRng` gives
//! reproducible samples.

use crate::graph::{NodeId, WordGraph};
use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Draws before a length-filtered sample gives up and takes any word
pub const MAX_SAMPLE_ATTEMPTS: usize = 100;

/// Result of a random walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Where the walk stopped
    pub end: NodeId,
    /// Every node visited, starting node first
    pub path: Vec<NodeId>,
}

impl Walk {
    /// Number of edges taken
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Random sampling over a word graph
pub struct Sampler<R: Rng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Reproducible sampler
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, otherwise seeded from the OS
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(|| Self::new(StdRng::from_os_rng()), Self::seeded)
    }
}

impl<R: Rng> Sampler<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Underlying random source, e.g. for `WordGraph::build_shuffled`
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// A random word, optionally of a given length
    ///
    /// Makes up to `MAX_SAMPLE_ATTEMPTS` draws looking for the requested
    /// length, then falls back to any word. Returns `None` only for an empty
    /// graph.
    pub fn random_word(&mut self, graph: &WordGraph, length: Option<usize>) -> Option<NodeId> {
        if graph.is_empty() {
            return None;
        }

        if let Some(length) = length {
            for _ in 0..MAX_SAMPLE_ATTEMPTS {
                let id = self.any_node(graph);
                if graph.word(id).len() == length {
                    return Some(id);
                }
            }
            debug!("No {length}-letter word after {MAX_SAMPLE_ATTEMPTS} draws, taking any word");
        }

        Some(self.any_node(graph))
    }

    fn any_node(&mut self, graph: &WordGraph) -> NodeId {
        NodeId::new(self.rng.random_range(0..graph.len()))
    }

    /// Wander from `start` to random unvisited neighbors
    ///
    /// Stops after `max_steps` moves or when every neighbor has already been
    /// visited.
    pub fn random_walk(&mut self, graph: &WordGraph, start: NodeId, max_steps: usize) -> Walk {
        let mut path = vec![start];
        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut current = start;

        for _ in 0..max_steps {
            let options: Vec<NodeId> = graph
                .neighbors(current)
                .iter()
                .copied()
                .filter(|n| !visited.contains(n))
                .collect();
            let Some(&next) = options.choose(&mut self.rng) else {
                break;
            };
            visited.insert(next);
            path.push(next);
            current = next;
        }

        Walk { end: current, path }
    }

    /// A random word and the end of a random walk from it
    ///
    /// The two are always distinct and connected. Retries isolated starting
    /// words up to `MAX_SAMPLE_ATTEMPTS` times.
    pub fn random_pair(
        &mut self,
        graph: &WordGraph,
        length: Option<usize>,
        wander_steps: usize,
    ) -> Option<(NodeId, NodeId)> {
        if wander_steps == 0 {
            return None;
        }
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let start = self.random_word(graph, length)?;
            let walk = self.random_walk(graph, start, wander_steps);
            if walk.end != start {
                return Some((start, walk.end));
            }
        }
        None
    }
}
