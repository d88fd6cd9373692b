use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use crate::optim::optimizer_trait::Optimizer;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. With both disabled a step is
/// `value -= lr * grad`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: HashMap<NodeId, f64>,
}

impl Sgd {
    /// Plain SGD over `params`.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Velocity kept for `param`, if a momentum step has touched it.
    pub fn momentum_buffer(&self, param: NodeId) -> Option<f64> {
        self.momentum_buffers.get(&param).copied()
    }

    /// Forgets all momentum buffers.
    pub fn reset_state(&mut self) {
        self.momentum_buffers.clear();
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), MicrogradError> {
        for &param in &self.params {
            let value = graph.value(param)?;
            let mut d_p = graph.grad(param)?;

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * value;
            }

            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }

            graph.set_value(param, value - self.lr * d_p)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), MicrogradError> {
        graph.zero_grads(&self.params)
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
