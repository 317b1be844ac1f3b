//! Ladder solving command
//!
//! Solves a single source/destination query and records how it went.

use crate::solver::{DEFAULT_MAX_STEPS, Ladder, LadderError, PathFinder, SearchStats, Solver};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub source: String,
    pub dest: String,
    pub max_steps: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(source: String, dest: String) -> Self {
        Self {
            source,
            dest,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub source: String,
    pub dest: String,
    pub engine: &'static str,
    pub outcome: Result<Ladder, LadderError>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Solve one query with the given solver
///
/// Query failures are part of the result rather than an error, so callers
/// can report them alongside the search diagnostics.
pub fn solve_ladder<P: PathFinder>(config: SolveConfig, solver: &mut Solver<P>) -> SolveResult {
    let start = Instant::now();
    let outcome = solver.solve(&config.source, &config.dest, config.max_steps);
    let duration = start.elapsed();

    SolveResult {
        source: config.source.to_ascii_uppercase(),
        dest: config.dest.to_ascii_uppercase(),
        engine: solver.engine().name(),
        outcome,
        stats: solver.last_stats(),
        duration,
    }
}
