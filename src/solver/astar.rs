//! Best-first (A*) ladder search
//!
//! Priority is cost-so-far plus the number of letters still wrong. Every edge
//! changes exactly one letter, so that estimate never overshoots and changes
//! by at most one across an edge.
//!
//! Differences from a textbook A*:
//! - the destination's best known cost doubles as a branch-and-bound limit on
//!   what gets admitted to the frontier;
//! - expanded nodes are reopened if a strictly cheaper route turns up.
//!
//! Frontier members are relaxed when reached more cheaply. The stale heap entry
//! is skipped when it surfaces.

use super::strategy::{PathFinder, SearchStats};
use crate::graph::{NodeId, WordGraph};
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    Frontier,
    Expanded,
}

/// Per-query bookkeeping for one discovered node
#[derive(Debug, Clone, Copy)]
struct SearchRecord {
    cost: usize,
    estimate: usize,
    parent: Option<NodeId>,
    membership: Membership,
}

/// Heap entry; field order gives lowest priority first, then discovery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    priority: usize,
    order: u64,
    node: NodeId,
    cost: usize,
}

/// Best-first search engine
///
/// Holds no state between queries apart from the last diagnostics.
#[derive(Debug, Clone, Default)]
pub struct AStarSolver {
    last_stats: SearchStats,
}

/// State of a single query, dropped when the query ends
struct Query<'g> {
    graph: &'g WordGraph,
    dest: NodeId,
    max_steps: usize,
    records: FxHashMap<NodeId, SearchRecord>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    next_order: u64,
    best_cost: Option<usize>,
    stats: SearchStats,
}

impl<'g> Query<'g> {
    fn new(graph: &'g WordGraph, dest: NodeId, max_steps: usize) -> Self {
        Self {
            graph,
            dest,
            max_steps,
            records: FxHashMap::default(),
            frontier: BinaryHeap::new(),
            next_order: 0,
            best_cost: None,
            stats: SearchStats::default(),
        }
    }

    /// Admission limit: the best solution so far, or the step budget
    fn bound(&self) -> usize {
        self.best_cost.unwrap_or(self.max_steps)
    }

    fn estimate(&self, node: NodeId) -> usize {
        self.graph
            .word(node)
            .distance(self.graph.word(self.dest))
    }

    fn push(&mut self, node: NodeId, cost: usize, estimate: usize) {
        self.frontier.push(Reverse(FrontierEntry {
            priority: cost + estimate,
            order: self.next_order,
            node,
            cost,
        }));
        self.next_order += 1;
        self.stats.frontier_peak = self.stats.frontier_peak.max(self.frontier.len());
    }

    fn note_destination(&mut self, cost: usize) {
        self.stats.worst_cost = Some(self.stats.worst_cost.map_or(cost, |w| w.max(cost)));
        if self.best_cost.is_none_or(|best| cost < best) {
            self.best_cost = Some(cost);
        }
    }

    fn run(&mut self, source: NodeId) {
        let estimate = self.estimate(source);
        if estimate > self.max_steps {
            return;
        }
        self.records.insert(
            source,
            SearchRecord {
                cost: 0,
                estimate,
                parent: None,
                membership: Membership::Frontier,
            },
        );
        self.push(source, 0, estimate);

        while let Some(Reverse(entry)) = self.frontier.pop() {
            let Some(record) = self.records.get(&entry.node) else {
                continue;
            };
            if record.membership != Membership::Frontier || record.cost != entry.cost {
                continue; // superseded by a cheaper route
            }

            // Everything left costs at least this much; nothing can beat the best
            if self.best_cost.is_some_and(|best| entry.priority >= best) {
                break;
            }
            if entry.priority > self.bound() {
                continue;
            }

            if let Some(record) = self.records.get_mut(&entry.node) {
                record.membership = Membership::Expanded;
            }
            self.stats.nodes_expanded += 1;

            if entry.node != self.dest {
                self.expand(entry.node, entry.cost);
            }
        }
    }

    fn expand(&mut self, node: NodeId, cost: usize) {
        let graph = self.graph;
        let candidate = cost + 1;

        for &neighbor in graph.neighbors(node) {
            let bound = self.bound();

            if let Some(record) = self.records.get_mut(&neighbor) {
                // Known node: only a strictly cheaper route within bounds matters
                if candidate >= record.cost || candidate + record.estimate > bound {
                    continue;
                }
                record.cost = candidate;
                record.parent = Some(node);
                record.membership = Membership::Frontier;
                let estimate = record.estimate;
                self.stats.reopened += 1;
                self.push(neighbor, candidate, estimate);
            } else {
                let estimate = self.estimate(neighbor);
                if candidate + estimate > bound {
                    continue;
                }
                self.records.insert(
                    neighbor,
                    SearchRecord {
                        cost: candidate,
                        estimate,
                        parent: Some(node),
                        membership: Membership::Frontier,
                    },
                );
                self.push(neighbor, candidate, estimate);
            }

            if neighbor == self.dest {
                self.note_destination(candidate);
            }
        }
    }

    /// Walk predecessor links back from the destination
    fn reconstruct(&self) -> Option<Vec<NodeId>> {
        self.best_cost?;
        let mut path = Vec::new();
        let mut current = Some(self.dest);
        while let Some(node) = current {
            path.push(node);
            current = self.records.get(&node).and_then(|r| r.parent);
        }
        path.reverse();
        Some(path)
    }
}

impl AStarSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a query and return its diagnostics alongside the path
    pub fn solve_with_stats(
        &mut self,
        graph: &WordGraph,
        source: NodeId,
        dest: NodeId,
        max_steps: usize,
    ) -> (Option<Vec<NodeId>>, SearchStats) {
        let path = self.find_path(graph, source, dest, max_steps);
        (path, self.last_stats)
    }
}

impl PathFinder for AStarSolver {
    fn find_path(
        &mut self,
        graph: &WordGraph,
        source: NodeId,
        dest: NodeId,
        max_steps: usize,
    ) -> Option<Vec<NodeId>> {
        let mut query = Query::new(graph, dest, max_steps);
        query.run(source);

        query.stats.best_cost = query.best_cost;
        self.last_stats = query.stats;
        debug!(
            "A* {} -> {}: expanded {}, frontier peak {}, reopened {}, best {:?}, worst {:?}",
            graph.word(source),
            graph.word(dest),
            query.stats.nodes_expanded,
            query.stats.frontier_peak,
            query.stats.reopened,
            query.stats.best_cost,
            query.stats.worst_cost,
        );

        query.reconstruct()
    }

    fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}
