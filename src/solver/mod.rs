//! Word ladder search
//!
//! Two engines share the `PathFinder` trait: a best-first A* search and a
//! memoized depth-first branch-and-bound. `Solver` validates queries and
//! drives whichever engine it was given.

pub mod astar;
mod engine;
mod error;
pub mod memo;
pub mod strategy;

pub use astar::AStarSolver;
pub use engine::{DEFAULT_MAX_STEPS, Ladder, Solver};
pub use error::LadderError;
pub use memo::MemoSolver;
pub use strategy::{EngineType, PathFinder, SearchStats};
