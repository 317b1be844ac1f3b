//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_matches_result, print_reach_result, print_solve_result,
    print_walk_result,
};
