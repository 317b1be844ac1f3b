//! Command implementations

pub mod benchmark;
pub mod matches;
pub mod solve;
pub mod suite;

pub use benchmark::{BenchmarkResult, EngineRun, run_benchmark};
pub use matches::{MatchesResult, ReachResult, WalkResult, check_reachability, find_word_matches, random_walk};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
pub use suite::{SuiteConfig, SuiteStatistics, build_pairs, print_suite_statistics, run_suite};
