use super::activation::Activation;
use super::init::Initializer;
use super::module::{prefixed, Module};
use super::neuron::Neuron;
use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use rand::Rng;

/// `nout` neurons reading the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, activation, initializer, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrogradError> {
        if inputs.len() != self.nin {
            return Err(MicrogradError::InputSizeMismatch {
                expected: self.nin,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|n| n.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed("neurons", i, n.named_parameters()))
            .collect()
    }
}
