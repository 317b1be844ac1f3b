//! Word graph: nodes, one-letter adjacency and connected components
//!
//! The graph is built once and is read-only afterwards. Solvers keep their own
//! per-query state in side tables keyed by [`NodeId`].

mod builder;
mod components;
mod node;

pub use builder::WordGraph;
pub use components::{ConnectivityIndex, Reachability};
pub use node::{ComponentId, Node, NodeId};
