//! Path-finding engines
//!
//! Defines the `PathFinder` trait and the runtime-selectable engine wrapper.

use super::astar::AStarSolver;
use super::memo::MemoSolver;
use crate::graph::{NodeId, WordGraph};

/// Diagnostics from the most recent search
///
/// Each engine fills in the counters that apply to it. None of these affect
/// the returned path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (A*) or recursive calls made (memoized DFS)
    pub nodes_expanded: usize,
    /// Largest frontier size seen (A*)
    pub frontier_peak: usize,
    /// Frontier or expanded nodes whose cost was lowered (A*)
    pub reopened: usize,
    /// Suffixes served from the memo cache (memoized DFS)
    pub cache_hits: usize,
    /// Suffixes written to the memo cache (memoized DFS)
    pub cache_stores: usize,
    /// Cheapest cost at which the destination was reached
    pub best_cost: Option<usize>,
    /// Most expensive cost at which the destination was reached
    pub worst_cost: Option<usize>,
}

/// A search engine over an immutable word graph
///
/// Implementations may keep state across queries (the memo cache), but a
/// query's result must depend only on the graph and the arguments.
pub trait PathFinder {
    /// Find a path from `source` to `dest` using at most `max_steps` edges
    ///
    /// The caller guarantees both nodes are distinct, of equal length and in
    /// the same component. Returns the node sequence from `source` to `dest`
    /// inclusive, or `None` if the budget is exhausted.
    fn find_path(
        &mut self,
        graph: &WordGraph,
        source: NodeId,
        dest: NodeId,
        max_steps: usize,
    ) -> Option<Vec<NodeId>>;

    /// Diagnostics from the last `find_path` call
    fn last_stats(&self) -> SearchStats;

    /// Short engine name for display
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all engine types
///
/// Allows runtime selection of engine while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum EngineType {
    /// Best-first search with the letter-distance heuristic (default)
    AStar(AStarSolver),
    /// Depth-first branch-and-bound with a suffix cache
    Memo(MemoSolver),
}

impl PathFinder for EngineType {
    fn find_path(
        &mut self,
        graph: &WordGraph,
        source: NodeId,
        dest: NodeId,
        max_steps: usize,
    ) -> Option<Vec<NodeId>> {
        match self {
            Self::AStar(s) => s.find_path(graph, source, dest, max_steps),
            Self::Memo(s) => s.find_path(graph, source, dest, max_steps),
        }
    }

    fn last_stats(&self) -> SearchStats {
        match self {
            Self::AStar(s) => s.last_stats(),
            Self::Memo(s) => s.last_stats(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::AStar(s) => s.name(),
            Self::Memo(s) => s.name(),
        }
    }
}

impl EngineType {
    /// Create engine from name string
    ///
    /// Supported names: "astar", "a-star", "best-first", "memo", "dfs".
    /// Defaults to A* if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "memo" | "dfs" | "recursive" => Self::Memo(MemoSolver::new()),
            _ => Self::AStar(AStarSolver::new()),
        }
    }

    /// A new engine of the same kind with no cached state
    #[must_use]
    pub fn fresh(&self) -> Self {
        match self {
            Self::AStar(_) => Self::AStar(AStarSolver::new()),
            Self::Memo(_) => Self::Memo(MemoSolver::new()),
        }
    }
}

impl Default for EngineType {
    fn default() -> Self {
        Self::AStar(AStarSolver::new())
    }
}
