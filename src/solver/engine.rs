//! Main word ladder solver interface

use super::error::LadderError;
use super::strategy::{PathFinder, SearchStats};
use crate::core::Word;
use crate::graph::{NodeId, Reachability, WordGraph};
use log::{debug, info};
use std::fmt;

/// Step budget used when the caller has no better idea
pub const DEFAULT_MAX_STEPS: usize = 20;

/// A solved ladder, source first and destination last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the ladder, endpoints included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of one-letter changes
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn source(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Word> {
        self.words.last()
    }

    /// True when every consecutive pair differs in exactly one letter
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].is_neighbor_of(&pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Main word ladder solver
///
/// Validates queries against the graph, then hands the search to an engine.
///
/// # Examples
/// ```
/// use word_ladder::graph::WordGraph;
/// use word_ladder::solver::{AStarSolver, Solver, DEFAULT_MAX_STEPS};
///
/// let graph = WordGraph::from_strs(&["CAT", "COT", "COG", "DOG", "DOT"]).unwrap();
/// let mut solver = Solver::new(AStarSolver::new(), &graph);
///
/// let ladder = solver.solve("CAT", "DOG", DEFAULT_MAX_STEPS).unwrap();
/// assert_eq!(ladder.len(), 4);
/// assert_eq!(ladder.source().unwrap().text(), "CAT");
/// ```
pub struct Solver<'a, P: PathFinder> {
    engine: P,
    graph: &'a WordGraph,
}

impl<'a, P: PathFinder> Solver<'a, P> {
    /// Create a new solver over `graph` using the given engine
    pub const fn new(engine: P, graph: &'a WordGraph) -> Self {
        Self { engine, graph }
    }

    #[must_use]
    pub const fn graph(&self) -> &'a WordGraph {
        self.graph
    }

    #[must_use]
    pub const fn engine(&self) -> &P {
        &self.engine
    }

    pub const fn engine_mut(&mut self) -> &mut P {
        &mut self.engine
    }

    /// Diagnostics from the engine's last search
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.engine.last_stats()
    }

    /// Find a shortest ladder from `source` to `dest` in at most `max_steps`
    ///
    /// # Errors
    /// - `LengthMismatch` if the words differ in length
    /// - `NotFound` if either word is missing from the dictionary
    /// - `TrivialQuery` if both are the same word
    /// - `Unreachable` if they lie in different components or the budget
    ///   runs out first
    pub fn solve(
        &mut self,
        source: &str,
        dest: &str,
        max_steps: usize,
    ) -> Result<Ladder, LadderError> {
        let (from, to) = self.resolve(source, dest)?;

        // No simple path is longer than the component it lives in
        let component_size = self
            .graph
            .connectivity()
            .component_size(self.graph.component(from));
        let budget = max_steps.min(component_size.saturating_sub(1));

        let path = self
            .engine
            .find_path(self.graph, from, to, budget)
            .ok_or(LadderError::Unreachable)?;

        let ladder = Ladder::new(self.graph.words_of(&path));
        info!(
            "{} solved {} -> {} in {} steps",
            self.engine.name(),
            self.graph.word(from),
            self.graph.word(to),
            ladder.steps()
        );
        Ok(ladder)
    }

    /// Validate a query and return its endpoints
    fn resolve(&self, source: &str, dest: &str) -> Result<(NodeId, NodeId), LadderError> {
        let source_len = source.chars().count();
        let dest_len = dest.chars().count();
        if source_len != dest_len {
            return Err(LadderError::LengthMismatch {
                source_len,
                dest_len,
            });
        }

        let from = self
            .graph
            .find_node(source)
            .ok_or_else(|| LadderError::NotFound(source.to_ascii_uppercase()))?;
        let to = self
            .graph
            .find_node(dest)
            .ok_or_else(|| LadderError::NotFound(dest.to_ascii_uppercase()))?;

        if from == to {
            return Err(LadderError::TrivialQuery);
        }
        if !self.graph.connectivity().connected(from, to) {
            debug!("{source} and {dest} lie in different components");
            return Err(LadderError::Unreachable);
        }

        Ok((from, to))
    }

    /// Constant-time check for whether a ladder can exist
    #[must_use]
    pub fn is_reachable(&self, word1: &str, word2: &str) -> Reachability {
        self.graph.is_reachable(word1, word2)
    }

    /// Words one letter away from `word`
    #[must_use]
    pub fn find_matches(&self, word: &str) -> Vec<Word> {
        self.graph.find_matches(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AStarSolver, EngineType, MemoSolver};

    fn small_graph() -> WordGraph {
        WordGraph::from_strs(&["CAT", "COT", "COG", "DOG", "DOT", "DOGS"]).unwrap()
    }

    fn texts(ladder: &Ladder) -> Vec<&str> {
        ladder.words().iter().map(Word::text).collect()
    }

    #[test]
    fn cat_to_dog_takes_three_steps() {
        let graph = small_graph();
        for name in ["astar", "memo"] {
            let mut solver = Solver::new(EngineType::from_name(name), &graph);
            let ladder = solver.solve("CAT", "DOG", DEFAULT_MAX_STEPS).unwrap();

            assert_eq!(ladder.len(), 4, "engine {name}");
            assert_eq!(ladder.steps(), 3);
            assert_eq!(texts(&ladder)[0], "CAT");
            assert_eq!(texts(&ladder)[3], "DOG");
            assert!(ladder.is_valid());
        }
    }

    #[test]
    fn lowercase_input_is_accepted() {
        let graph = small_graph();
        let mut solver = Solver::new(AStarSolver::new(), &graph);
        let ladder = solver.solve("cat", "cog", DEFAULT_MAX_STEPS).unwrap();
        assert_eq!(texts(&ladder), vec!["CAT", "COT", "COG"]);
    }

    #[test]
    fn same_word_is_trivial() {
        let graph = small_graph();
        let mut solver = Solver::new(AStarSolver::new(), &graph);
        assert_eq!(
            solver.solve("CAT", "CAT", DEFAULT_MAX_STEPS),
            Err(LadderError::TrivialQuery)
        );
    }

    #[test]
    fn length_mismatch_is_checked_first() {
        let graph = small_graph();
        let mut solver = Solver::new(MemoSolver::new(), &graph);
        assert_eq!(
            solver.solve("CAT", "DOGS", DEFAULT_MAX_STEPS),
            Err(LadderError::LengthMismatch {
                source_len: 3,
                dest_len: 4
            })
        );
        // Neither word needs to exist for a length mismatch
        assert!(matches!(
            solver.solve("QQQ", "ZZZZ", DEFAULT_MAX_STEPS),
            Err(LadderError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn unknown_word_is_not_found() {
        let graph = small_graph();
        let mut solver = Solver::new(AStarSolver::new(), &graph);
        assert_eq!(
            solver.solve("CAT", "zzz", DEFAULT_MAX_STEPS),
            Err(LadderError::NotFound("ZZZ".to_string()))
        );
    }

    #[test]
    fn separate_components_are_unreachable() {
        let graph = WordGraph::from_strs(&["AAA", "AAB", "ZZZ", "ZZY"]).unwrap();

        for name in ["astar", "memo"] {
            let mut solver = Solver::new(EngineType::from_name(name), &graph);

            let reach = solver.is_reachable("AAA", "ZZZ");
            assert!(!reach.possible);
            assert!(reach.both_valid);
            assert_eq!(
                solver.solve("AAA", "ZZZ", DEFAULT_MAX_STEPS),
                Err(LadderError::Unreachable),
                "engine {name}"
            );
            assert!(solver.is_reachable("ZZZ", "ZZY").possible);
            assert_eq!(
                solver.solve("ZZZ", "ZZY", DEFAULT_MAX_STEPS).map(|l| l.steps()),
                Ok(1),
                "engine {name}"
            );
        }
    }

    #[test]
    fn exhausted_budget_is_unreachable() {
        let graph = small_graph();
        for name in ["astar", "memo"] {
            let mut solver = Solver::new(EngineType::from_name(name), &graph);
            assert_eq!(
                solver.solve("CAT", "DOG", 2),
                Err(LadderError::Unreachable),
                "engine {name}"
            );
        }
    }

    #[test]
    fn find_matches_through_solver() {
        let graph = small_graph();
        let solver = Solver::new(AStarSolver::new(), &graph);
        let mut matches: Vec<String> = solver
            .find_matches("COT")
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        matches.sort();
        assert_eq!(matches, vec!["CAT", "COG", "DOT"]);
    }

    #[test]
    fn ladder_display_joins_with_arrows() {
        let graph = small_graph();
        let mut solver = Solver::new(AStarSolver::new(), &graph);
        let ladder = solver.solve("CAT", "COG", DEFAULT_MAX_STEPS).unwrap();
        assert_eq!(ladder.to_string(), "CAT -> COT -> COG");
    }
}
