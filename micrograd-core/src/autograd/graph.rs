use super::node::{Node, NodeId};
use super::op::Op;
use crate::error::MicrogradError;

/// Arena holding every node of one or more computations.
///
/// Operations append a new node and return its [`NodeId`]; existing nodes are
/// never restructured. Operand references are ids into the same arena, so a
/// leaf shared by many consumers (a weight used by several forward passes)
/// accumulates gradient from all of them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    // Bumped whenever `truncate` drops nodes; stamped into every new id.
    generation: u32,
}

/// Arena length captured by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            generation: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- Leaf construction ---

    /// Creates a leaf node (input, parameter or lifted scalar) with gradient 0.
    pub fn constant(&mut self, value: f64) -> NodeId {
        self.push(value, Op::Leaf)
    }

    /// Creates a leaf node carrying a diagnostic label.
    pub fn labeled_constant(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        let id = self.constant(value);
        self.nodes[id.index].label = Some(label.into());
        id
    }

    // --- Accessors ---

    pub fn value(&self, id: NodeId) -> Result<f64, MicrogradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, MicrogradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op, MicrogradError> {
        Ok(self.node(id)?.op)
    }

    pub fn operands(&self, id: NodeId) -> Result<&[NodeId], MicrogradError> {
        Ok(self.node(id)?.op.operands())
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, MicrogradError> {
        Ok(self.node(id)?.label.as_deref())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), MicrogradError> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Overwrites a gradient. Used to seed a root and to reset parameters.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), MicrogradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), MicrogradError> {
        self.set_grad(id, 0.0)
    }

    pub fn zero_grads(&mut self, ids: &[NodeId]) -> Result<(), MicrogradError> {
        for &id in ids {
            self.zero_grad(id)?;
        }
        Ok(())
    }

    /// Overwrites the value of a leaf, e.g. for a parameter update.
    ///
    /// Interior nodes keep the value computed at construction; nodes already
    /// built from this leaf are not recomputed.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), MicrogradError> {
        let node = self.node_mut(id)?;
        if !node.op.is_leaf() {
            return Err(MicrogradError::NotALeaf { id: id.index });
        }
        node.value = value;
        Ok(())
    }

    // --- Arena lifetime ---

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Ids of dropped nodes become invalid and are rejected by later calls
    /// with [`MicrogradError::UnknownNode`], including after new nodes have
    /// reused their slots. Ids created before `checkpoint` stay valid.
    pub fn truncate(&mut self, checkpoint: Checkpoint) {
        if checkpoint.0 < self.nodes.len() {
            self.nodes.truncate(checkpoint.0);
            self.generation = self.generation.wrapping_add(1);
        }
    }

    // --- Operations ---

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)? + self.value(b)?;
        Ok(self.push(value, Op::Add([a, b])))
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)? * self.value(b)?;
        Ok(self.push(value, Op::Mul([a, b])))
    }

    /// `a * -1`.
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        self.check(a)?;
        let minus_one = self.constant(-1.0);
        self.mul(a, minus_one)
    }

    /// `a + (-b)`.
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MicrogradError> {
        self.check(a)?;
        let neg_b = self.neg(b)?;
        self.add(a, neg_b)
    }

    /// `a` raised to a constant exponent.
    ///
    /// Follows IEEE-754: `0^negative` gives infinity and a non-finite exponent
    /// propagates into the value and gradient instead of failing.
    pub fn pow(&mut self, a: NodeId, exponent: f64) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)?.powf(exponent);
        Ok(self.push(value, Op::Pow(a, exponent)))
    }

    /// `a * b^-1`.
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MicrogradError> {
        self.check(a)?;
        let inv_b = self.pow(b, -1.0)?;
        self.mul(a, inv_b)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)?.exp();
        Ok(self.push(value, Op::Exp(a)))
    }

    /// Natural logarithm; fails on non-positive (or NaN) input.
    pub fn log(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        let x = self.value(a)?;
        if x <= 0.0 || x.is_nan() {
            return Err(MicrogradError::Domain {
                operation: "log".to_string(),
                value: x,
            });
        }
        Ok(self.push(x.ln(), Op::Log(a)))
    }

    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)?.tanh();
        Ok(self.push(value, Op::Tanh(a)))
    }

    pub fn sigmoid(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        let value = 1.0 / (1.0 + (-self.value(a)?).exp());
        Ok(self.push(value, Op::Sigmoid(a)))
    }

    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, MicrogradError> {
        let value = self.value(a)?.max(0.0);
        Ok(self.push(value, Op::Relu(a)))
    }

    /// Left fold of `add` over `ids`. An empty slice yields a constant 0.
    pub fn sum(&mut self, ids: &[NodeId]) -> Result<NodeId, MicrogradError> {
        let Some((&first, rest)) = ids.split_first() else {
            return Ok(self.constant(0.0));
        };
        self.check(first)?;
        rest.iter().try_fold(first, |acc, &id| self.add(acc, id))
    }

    // --- Internals ---

    fn push(&mut self, value: f64, op: Op) -> NodeId {
        let id = NodeId::new(self.nodes.len(), self.generation);
        self.nodes.push(Node::new(self.generation, value, op));
        id
    }

    fn check(&self, id: NodeId) -> Result<(), MicrogradError> {
        self.node(id).map(|_| ())
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, MicrogradError> {
        self.nodes
            .get(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(MicrogradError::UnknownNode {
                id: id.index,
                len: self.nodes.len(),
            })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, MicrogradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(MicrogradError::UnknownNode { id: id.index, len })
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
