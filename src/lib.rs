//! Word Ladder
//!
//! Finds shortest word ladders: chains of equal-length dictionary words where
//! each step changes exactly one letter. Two engines are provided, a best-first
//! A* search and a memoized depth-first branch-and-bound.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::WordGraph;
//! use word_ladder::solver::{EngineType, Solver, DEFAULT_MAX_STEPS};
//!
//! let graph = WordGraph::from_strs(&["CAT", "COT", "COG", "DOG", "DOT"]).unwrap();
//! let mut solver = Solver::new(EngineType::from_name("astar"), &graph);
//!
//! let ladder = solver.solve("CAT", "DOG", DEFAULT_MAX_STEPS).unwrap();
//! println!("{ladder}");
//! assert_eq!(ladder.steps(), 3);
//! ```

// Core domain types
pub mod core;

// Word graph and connectivity
pub mod graph;

// Search engines
pub mod solver;

// Random words, walks and pairs
pub mod sampling;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
