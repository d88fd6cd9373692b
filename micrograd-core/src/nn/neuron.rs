use super::activation::Activation;
use super::init::Initializer;
use super::module::Module;
use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use rand::Rng;

/// A single unit computing `activation(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Allocates `nin` weight leaves and one bias leaf in `graph`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        let mut values = initializer.sample_n(nin + 1, rng)?;
        let bias_value = values.pop().unwrap_or(0.0);
        let weights = values.into_iter().map(|w| graph.constant(w)).collect();
        let bias = graph.constant(bias_value);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Wraps existing leaves; used when weights are chosen by hand.
    pub fn from_parts(weights: Vec<NodeId>, bias: NodeId, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Output node for one input vector.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let mut acc = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            acc = graph.add(acc, wx)?;
        }
        self.activation.apply(graph, acc)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrogradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w.{i}"), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
