//! Depth-first branch-and-bound search with a suffix cache
//!
//! Each call explores from one node with a remaining step budget. Once a
//! subpath is found, later siblings only get enough budget to beat it.
//! Successful suffixes longer than a single hop are cached under
//! `(node, destination)` and reused by later calls and later queries.
//!
//! A query deepens its budget one step at a time, starting from the letter
//! distance between the endpoints, so the search never wanders deeper than
//! the shortest ladder. The first level that succeeds gives a shortest ladder.

use super::strategy::{PathFinder, SearchStats};
use crate::graph::{NodeId, WordGraph};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Shortest suffix (in nodes) worth caching; one-hop suffixes are found directly
pub const MIN_CACHED_SUFFIX_LEN: usize = 3;

type CacheKey = (NodeId, NodeId);

/// Memoized depth-first engine
///
/// The cache is keyed by destination as well as node, so a suffix computed
/// toward one destination is never served for another.
#[derive(Debug, Clone, Default)]
pub struct MemoSolver {
    cache: FxHashMap<CacheKey, Vec<NodeId>>,
    last_stats: SearchStats,
}

/// Recursion state for one query
struct Query<'g> {
    graph: &'g WordGraph,
    dest: NodeId,
    in_path: FxHashSet<NodeId>,
    stats: SearchStats,
}

impl MemoSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached suffixes
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached suffix
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Cached suffix from `node` toward `dest`, if any
    #[must_use]
    pub fn cached_suffix(&self, node: NodeId, dest: NodeId) -> Option<&[NodeId]> {
        self.cache.get(&(node, dest)).map(Vec::as_slice)
    }

    /// Suffix from `current` to the destination inclusive, using at most
    /// `budget` edges
    fn explore(&mut self, query: &mut Query<'_>, current: NodeId, budget: usize) -> Option<Vec<NodeId>> {
        query.stats.nodes_expanded += 1;

        if budget == 0 {
            return None;
        }

        let graph = query.graph;
        if graph.word(current).distance(graph.word(query.dest)) > budget {
            return None;
        }

        if let Some(suffix) = self.cache.get(&(current, query.dest))
            && suffix.len() - 1 <= budget
            && !suffix[1..].iter().any(|n| query.in_path.contains(n))
        {
            query.stats.cache_hits += 1;
            return Some(suffix.clone());
        }

        let neighbors = graph.neighbors(current);
        if neighbors.contains(&query.dest) {
            return Some(vec![current, query.dest]);
        }

        query.in_path.insert(current);

        let mut best: Option<Vec<NodeId>> = None;
        let mut limit = budget - 1;
        for &neighbor in neighbors {
            if query.in_path.contains(&neighbor) {
                continue;
            }
            if let Some(subpath) = self.explore(query, neighbor, limit) {
                // Siblings must now finish in fewer steps than this one did
                limit = limit.min(subpath.len().saturating_sub(2));

                let mut suffix = Vec::with_capacity(subpath.len() + 1);
                suffix.push(current);
                suffix.extend(subpath);
                best = Some(suffix);

                if limit == 0 {
                    break;
                }
            }
        }

        query.in_path.remove(&current);

        if let Some(suffix) = &best
            && suffix.len() >= MIN_CACHED_SUFFIX_LEN
        {
            self.cache.insert((current, query.dest), suffix.clone());
            query.stats.cache_stores += 1;
        }

        best
    }
}

impl PathFinder for MemoSolver {
    fn find_path(
        &mut self,
        graph: &WordGraph,
        source: NodeId,
        dest: NodeId,
        max_steps: usize,
    ) -> Option<Vec<NodeId>> {
        let mut query = Query {
            graph,
            dest,
            in_path: FxHashSet::default(),
            stats: SearchStats::default(),
        };

        let start = graph.word(source).distance(graph.word(dest)).max(1);
        let mut path = None;
        for budget in start..=max_steps {
            path = self.explore(&mut query, source, budget);
            if path.is_some() {
                break;
            }
        }

        query.stats.best_cost = path.as_ref().map(|p| p.len() - 1);
        query.stats.worst_cost = query.stats.best_cost;
        self.last_stats = query.stats;
        debug!(
            "Memo {} -> {}: {} calls, {} cache hits, {} stores, cache size {}, cost {:?}",
            graph.word(source),
            graph.word(dest),
            query.stats.nodes_expanded,
            query.stats.cache_hits,
            query.stats.cache_stores,
            self.cache.len(),
            query.stats.best_cost,
        );

        path
    }

    fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    fn name(&self) -> &'static str {
        "memo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(words: &[&str]) -> WordGraph {
        WordGraph::from_strs(words).unwrap()
    }

    fn texts(graph: &WordGraph, path: &[NodeId]) -> Vec<String> {
        path.iter()
            .map(|&id| graph.word(id).text().to_string())
            .collect()
    }

    fn ids(graph: &WordGraph, from: &str, to: &str) -> (NodeId, NodeId) {
        (graph.find_node(from).unwrap(), graph.find_node(to).unwrap())
    }

    #[test]
    fn finds_ladder() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let path = MemoSolver::new().find_path(&g, cat, dog, 10).unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path[0], cat);
        assert_eq!(path[3], dog);
    }

    #[test]
    fn adjacent_destination_returns_one_hop() {
        let g = graph(&["CAT", "COT", "CUT"]);
        let (cat, cut) = ids(&g, "CAT", "CUT");
        let mut solver = MemoSolver::new();
        let path = solver.find_path(&g, cat, cut, 10).unwrap();

        assert_eq!(texts(&g, &path), vec!["CAT", "CUT"]);
        assert_eq!(solver.cache_len(), 0);
    }

    #[test]
    fn budget_too_small_fails() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let mut solver = MemoSolver::new();

        assert!(solver.find_path(&g, cat, dog, 0).is_none());
        assert!(solver.find_path(&g, cat, dog, 2).is_none());
        assert!(solver.find_path(&g, cat, dog, 3).is_some());
    }

    fn explore_once(
        solver: &mut MemoSolver,
        g: &WordGraph,
        source: NodeId,
        dest: NodeId,
        budget: usize,
    ) -> Option<Vec<NodeId>> {
        let mut query = Query {
            graph: g,
            dest,
            in_path: FxHashSet::default(),
            stats: SearchStats::default(),
        };
        solver.explore(&mut query, source, budget)
    }

    #[test]
    fn tightened_bound_finds_shorter_sibling() {
        // AAA explores BAA first, which leads down a four-step corridor;
        // the later sibling AAC reaches ACC in two
        let g = graph(&["AAA", "BAA", "BCA", "BCC", "ACC", "AAC"]);
        let (aaa, acc) = ids(&g, "AAA", "ACC");
        let mut solver = MemoSolver::new();
        let path = explore_once(&mut solver, &g, aaa, acc, 10).unwrap();

        assert_eq!(texts(&g, &path), vec!["AAA", "AAC", "ACC"]);

        // The corridor was still fully explored and cached
        let baa = g.find_node("BAA").unwrap();
        assert_eq!(solver.cached_suffix(baa, acc).map(<[NodeId]>::len), Some(4));
    }

    #[test]
    fn deepening_skips_the_long_corridor() {
        let g = graph(&["AAA", "BAA", "BCA", "BCC", "ACC", "AAC"]);
        let (aaa, acc) = ids(&g, "AAA", "ACC");
        let mut solver = MemoSolver::new();
        let path = solver.find_path(&g, aaa, acc, 10).unwrap();

        assert_eq!(texts(&g, &path), vec!["AAA", "AAC", "ACC"]);
        let baa = g.find_node("BAA").unwrap();
        assert!(solver.cached_suffix(baa, acc).is_none());
    }

    #[test]
    fn deepening_returns_shortest_ladder() {
        // Dictionary order sends the first branch round the long way
        let g = graph(&["AAA", "BAA", "BBA", "BBB", "ABB", "AAB"]);
        let (aaa, abb) = ids(&g, "AAA", "ABB");
        let path = MemoSolver::new().find_path(&g, aaa, abb, 20).unwrap();
        assert_eq!(texts(&g, &path), vec!["AAA", "AAB", "ABB"]);
    }

    #[test]
    fn suffixes_are_cached_per_destination() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let mut solver = MemoSolver::new();
        solver.find_path(&g, cat, dog, 10).unwrap();

        let cached = solver.cached_suffix(cat, dog).unwrap();
        assert_eq!(cached.first(), Some(&cat));
        assert_eq!(cached.last(), Some(&dog));

        // Same start, different destination: nothing to reuse
        let cog = g.find_node("COG").unwrap();
        assert!(solver.cached_suffix(cat, cog).is_none());
    }

    #[test]
    fn cache_is_not_reused_for_another_destination() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let dot = g.find_node("DOT").unwrap();
        let mut solver = MemoSolver::new();

        solver.find_path(&g, cat, dog, 10).unwrap();
        let path = solver.find_path(&g, cat, dot, 10).unwrap();
        assert_eq!(texts(&g, &path), vec!["CAT", "COT", "DOT"]);
    }

    #[test]
    fn repeated_query_hits_cache_with_same_result() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let mut solver = MemoSolver::new();

        let first = solver.find_path(&g, cat, dog, 10);
        let second = solver.find_path(&g, cat, dog, 10);
        assert_eq!(first, second);
        assert_eq!(solver.last_stats().cache_hits, 1);
        assert_eq!(solver.last_stats().nodes_expanded, 1);
    }

    #[test]
    fn cached_suffix_respects_smaller_budget() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let mut solver = MemoSolver::new();

        solver.find_path(&g, cat, dog, 10).unwrap();
        assert!(solver.find_path(&g, cat, dog, 2).is_none());
    }

    #[test]
    fn clear_cache_empties() {
        let g = graph(&["CAT", "COT", "COG", "DOG", "DOT"]);
        let (cat, dog) = ids(&g, "CAT", "DOG");
        let mut solver = MemoSolver::new();

        solver.find_path(&g, cat, dog, 10).unwrap();
        assert!(solver.cache_len() > 0);
        solver.clear_cache();
        assert_eq!(solver.cache_len(), 0);
    }

    #[test]
    fn path_never_revisits_a_node() {
        let g = graph(&[
            "COLD", "CORD", "CARD", "WARD", "WARM", "CORM", "WORM", "WORD", "COLT", "CULT",
        ]);
        let (cold, warm) = ids(&g, "COLD", "WARM");
        let path = MemoSolver::new().find_path(&g, cold, warm, 12).unwrap();

        let unique: FxHashSet<NodeId> = path.iter().copied().collect();
        assert_eq!(unique.len(), path.len());
        for pair in path.windows(2) {
            assert!(g.word(pair[0]).is_neighbor_of(g.word(pair[1])));
        }
    }
}
