use super::graph::Graph;
use super::node::NodeId;
use crate::error::MicrogradError;
use std::collections::{HashMap, HashSet};

impl Graph {
    /// Returns every node reachable from `root` with each node placed after
    /// all of its operands.
    ///
    /// Depth-first over operand edges in operand order, appending a node once
    /// its operands are done and skipping ids already visited. The traversal
    /// keeps its own stack, so long chains (a neuron summing hundreds of
    /// inputs) do not recurse.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, MicrogradError> {
        self.node(root)?;

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut order = Vec::new();
        // (node, index of the next operand to descend into)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        visited.insert(root);

        while let Some(frame) = stack.last_mut() {
            let id = frame.0;
            let operands = self.node(id)?.op.operands();
            if let Some(&child) = operands.get(frame.1) {
                frame.1 += 1;
                self.node(child)?;
                if visited.insert(child) {
                    stack.push((child, 0));
                }
            } else {
                order.push(id);
                stack.pop();
            }
        }

        log::trace!("topological_order from {}: {} nodes", root, order.len());
        Ok(order)
    }

    /// Reverse-mode differentiation from `root`.
    ///
    /// Seeds `grad(root) = 1`, then walks the topological order backwards,
    /// pushing each node's gradient into its operands through the local rule
    /// of its [`Op`](super::Op). Contributions for this call are gathered in a
    /// per-call map and then added to the stored gradients, so every reachable
    /// node gains exactly d(root)/d(node). Stored gradients are never reset
    /// here: calling this twice without zeroing doubles them.
    pub fn backward(&mut self, root: NodeId) -> Result<(), MicrogradError> {
        let order = self.topological_order(root)?;

        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(order.len());
        grad_map.insert(root, 1.0);

        for &id in order.iter().rev() {
            let upstream = grad_map.get(&id).copied().unwrap_or(0.0);
            let node = self.node(id)?;
            if node.op.is_leaf() {
                continue;
            }
            let locals = node.op.local_gradients(node.value, |operand| {
                self.node(operand).map(|n| n.value).unwrap_or(f64::NAN)
            });
            for (operand, local) in locals.into_iter().flatten() {
                *grad_map.entry(operand).or_insert(0.0) += local * upstream;
            }
        }

        for &id in &order {
            if id == root {
                self.set_grad(root, 1.0)?;
            } else if let Some(contribution) = grad_map.get(&id) {
                self.node_mut(id)?.grad += contribution;
            }
        }

        log::debug!("backward from {} propagated through {} nodes", root, order.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
