//! Graph node and identifier types

use crate::core::Word;
use std::fmt;

/// Index of a node inside its owning [`WordGraph`](super::WordGraph)
///
/// Solvers hold these instead of references so their side tables stay
/// independent of the graph's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the node in the graph's node list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Connected component tag shared by every node of one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl ComponentId {
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One dictionary word and its one-letter neighbors
///
/// Immutable once the graph is built. Algorithm state never lives here.
#[derive(Debug, Clone)]
pub struct Node {
    word: Word,
    neighbors: Vec<NodeId>,
    component: ComponentId,
}

impl Node {
    pub(crate) const fn new(word: Word, neighbors: Vec<NodeId>, component: ComponentId) -> Self {
        Self {
            word,
            neighbors,
            component,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Neighbors in graph order (possibly shuffled at build time)
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    #[must_use]
    pub const fn component(&self) -> ComponentId {
        self.component
    }
}
