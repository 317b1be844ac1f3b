//! Interactive ladder explorer
//!
//! A ratatui front end for solving ladders, browsing neighbors and trying
//! random pairs.

mod app;
mod rendering;

pub use app::{App, InputMode, LadderInfo, run_tui};
