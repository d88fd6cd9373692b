//! Autograd engine: an arena of scalar nodes and reverse-mode differentiation.
//!
//! Nodes are appended to a [`Graph`] as operations are applied and refer to
//! their operands by [`NodeId`]. Each node's local derivative rule is described
//! by its [`Op`] tag; [`Graph::backward`] walks the nodes reachable from a root
//! in reverse topological order and accumulates gradients with the chain rule.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod node;
pub mod op;

pub use graph::{Checkpoint, Graph};
pub use node::NodeId;
pub use op::Op;
