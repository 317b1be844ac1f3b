//! Benchmark command
//!
//! Runs both engines over the same pairs, timing each and checking whether
//! they agree on ladder length.

use crate::graph::WordGraph;
use crate::solver::{EngineType, PathFinder, Solver};
use std::time::{Duration, Instant};

/// Timing and outcome of one engine over the whole pair set
#[derive(Debug, Clone)]
pub struct EngineRun {
    pub engine: &'static str,
    pub solved: usize,
    pub failed: usize,
    pub total_steps: usize,
    pub nodes_expanded: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
    /// Ladder length in steps per pair, `None` where the query failed
    pub steps: Vec<Option<usize>>,
}

impl EngineRun {
    #[must_use]
    pub fn average_steps(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.solved as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub runs: Vec<EngineRun>,
    /// Pairs where every engine returned the same outcome length
    pub agreements: usize,
}

/// Run every pair through one engine, keeping its state across queries
pub fn run_engine(
    graph: &WordGraph,
    engine: EngineType,
    pairs: &[(String, String)],
    max_steps: usize,
) -> EngineRun {
    let mut solver = Solver::new(engine, graph);
    let mut steps = Vec::with_capacity(pairs.len());
    let mut nodes_expanded = 0;

    let start = Instant::now();
    for (source, dest) in pairs {
        let outcome = solver.solve(source, dest, max_steps);
        nodes_expanded += solver.last_stats().nodes_expanded;
        steps.push(outcome.ok().map(|ladder| ladder.steps()));
    }
    let duration = start.elapsed();

    let solved = steps.iter().flatten().count();
    let secs = duration.as_secs_f64();

    EngineRun {
        engine: solver.engine().name(),
        solved,
        failed: pairs.len() - solved,
        total_steps: steps.iter().flatten().sum(),
        nodes_expanded,
        duration,
        pairs_per_second: if secs > 0.0 {
            pairs.len() as f64 / secs
        } else {
            0.0
        },
        steps,
    }
}

/// Benchmark every engine on the same pairs
pub fn run_benchmark(
    graph: &WordGraph,
    pairs: &[(String, String)],
    max_steps: usize,
) -> BenchmarkResult {
    let runs: Vec<EngineRun> = ["astar", "memo"]
        .into_iter()
        .map(|name| run_engine(graph, EngineType::from_name(name), pairs, max_steps))
        .collect();

    let agreements = (0..pairs.len())
        .filter(|&i| runs.windows(2).all(|w| w[0].steps[i] == w[1].steps[i]))
        .count();

    BenchmarkResult {
        total_pairs: pairs.len(),
        runs,
        agreements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn ladder_graph() -> WordGraph {
        WordGraph::from_strs(&[
            "CAT", "COT", "COG", "DOG", "DOT", "COLD", "CORD", "CARD", "WARD", "WARM",
        ])
        .unwrap()
    }

    #[test]
    fn benchmark_runs_both_engines() {
        let graph = ladder_graph();
        let pairs = pairs(&[("CAT", "DOG"), ("COLD", "WARM"), ("DOG", "CAT")]);
        let result = run_benchmark(&graph, &pairs, 20);

        assert_eq!(result.total_pairs, 3);
        assert_eq!(result.runs.len(), 2);
        assert_eq!(result.runs[0].engine, "astar");
        assert_eq!(result.runs[1].engine, "memo");
        for run in &result.runs {
            assert_eq!(run.solved, 3);
            assert_eq!(run.total_steps, 3 + 4 + 3);
            assert!(run.nodes_expanded > 0);
        }
        assert_eq!(result.agreements, 3);
    }

    #[test]
    fn failures_are_counted() {
        let graph = ladder_graph();
        let pairs = pairs(&[("CAT", "WARM"), ("CAT", "CAT"), ("CAT", "COT")]);
        let run = run_engine(&graph, EngineType::default(), &pairs, 20);

        assert_eq!(run.solved, 1);
        assert_eq!(run.failed, 2);
        assert_eq!(run.steps, vec![None, None, Some(1)]);
        assert!((run.average_steps() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pair_list() {
        let graph = ladder_graph();
        let result = run_benchmark(&graph, &[], 20);
        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.agreements, 0);
        assert!(result.runs.iter().all(|r| r.solved == 0));
    }
}
