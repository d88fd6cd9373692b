use super::op::Op;
use std::fmt;

/// Identifier of a node inside a [`Graph`](super::Graph).
///
/// Ids are arena indices: two nodes holding equal values are still distinct
/// entities, and identity is never derived from the value.
///
/// Each id also records the graph generation it was issued in. A node slot
/// reused after [`Graph::truncate`](super::Graph::truncate) carries a newer
/// generation, so an id kept from before the truncation no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        NodeId { index, generation }
    }

    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One step of a recorded computation.
///
/// `value` is fixed at creation. `grad` is the accumulator for
/// d(root)/d(this) and is the only field the backward pass mutates.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) generation: u32,
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(generation: u32, value: f64, op: Op) -> Self {
        Node {
            generation,
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }
}
