//! Connected component labelling and the reachability index
//!
//! Components are found once with a breadth-first flood fill. Afterwards a
//! reachability check is a pair of array lookups.

use super::node::{ComponentId, NodeId};
use std::collections::VecDeque;

/// Outcome of a reachability precheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reachability {
    /// Both words are in the graph and share a component
    pub possible: bool,
    /// Both words are present in the graph
    pub both_valid: bool,
}

impl Reachability {
    /// At least one word is missing from the graph
    pub const INVALID: Self = Self {
        possible: false,
        both_valid: false,
    };
}

/// Partition of the graph into connected components
#[derive(Debug, Clone, Default)]
pub struct ConnectivityIndex {
    assignment: Vec<ComponentId>,
    sizes: Vec<usize>,
}

impl ConnectivityIndex {
    /// Label every node of an adjacency list with its component
    ///
    /// Flood fill starts from the lowest-numbered untagged node, so component
    /// numbering is deterministic for a given adjacency.
    #[must_use]
    pub fn from_adjacency(adjacency: &[Vec<NodeId>]) -> Self {
        let mut assignment: Vec<Option<ComponentId>> = vec![None; adjacency.len()];
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..adjacency.len() {
            if assignment[start].is_some() {
                continue;
            }

            let component = ComponentId::new(sizes.len());
            let mut size = 0;
            assignment[start] = Some(component);
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                size += 1;
                for neighbor in &adjacency[current] {
                    let slot = &mut assignment[neighbor.index()];
                    if slot.is_none() {
                        *slot = Some(component);
                        queue.push_back(neighbor.index());
                    }
                }
            }

            sizes.push(size);
        }

        Self {
            assignment: assignment.into_iter().flatten().collect(),
            sizes,
        }
    }

    /// Component of a node
    ///
    /// # Panics
    /// Panics if the node does not belong to the labelled graph
    #[inline]
    #[must_use]
    pub fn component_of(&self, id: NodeId) -> ComponentId {
        self.assignment[id.index()]
    }

    /// True if a path can exist between the two nodes
    #[inline]
    #[must_use]
    pub fn connected(&self, a: NodeId, b: NodeId) -> bool {
        self.component_of(a) == self.component_of(b)
    }

    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of nodes in a component
    #[must_use]
    pub fn component_size(&self, component: ComponentId) -> usize {
        self.sizes.get(component.index()).copied().unwrap_or(0)
    }

    /// Size of the largest component (0 for an empty graph)
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    /// Components holding a single word with no neighbors
    #[must_use]
    pub fn isolated_count(&self) -> usize {
        self.sizes.iter().filter(|&&size| size == 1).count()
    }
}
