use super::activation::Activation;
use super::init::Initializer;
use super::layer::Layer;
use super::module::{prefixed, Module};
use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use rand::Rng;

/// Width and non-linearity of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: Activation,
}

impl LayerSpec {
    pub fn new(size: usize, activation: Activation) -> Self {
        LayerSpec { size, activation }
    }
}

/// Shape of a multi-layer perceptron: input width and one spec per layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlpConfig {
    pub nin: usize,
    pub layers: Vec<LayerSpec>,
}

impl MlpConfig {
    pub fn new(nin: usize, layers: Vec<LayerSpec>) -> Self {
        MlpConfig { nin, layers }
    }

    pub fn validate(&self) -> Result<(), MicrogradError> {
        if self.nin == 0 {
            return Err(MicrogradError::InvalidConfig(
                "MLP input width must be greater than 0".to_string(),
            ));
        }
        if self.layers.is_empty() {
            return Err(MicrogradError::InvalidConfig(
                "MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = self.layers.iter().position(|l| l.size == 0) {
            return Err(MicrogradError::InvalidConfig(format!(
                "MLP layer {i} has size 0"
            )));
        }
        Ok(())
    }

    /// Width of the last layer, or 0 when no layer is configured.
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }
}

impl Default for MlpConfig {
    /// Two inputs, one hidden tanh layer of 4, one tanh output.
    fn default() -> Self {
        MlpConfig {
            nin: 2,
            layers: vec![
                LayerSpec::new(4, Activation::Tanh),
                LayerSpec::new(1, Activation::Tanh),
            ],
        }
    }
}

/// Layers applied in sequence; each layer's fan-in is the previous layer's width.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    nin: usize,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        config: &MlpConfig,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        config.validate()?;
        initializer.validate()?;

        let mut layers = Vec::with_capacity(config.layers.len());
        let mut fan_in = config.nin;
        for spec in &config.layers {
            layers.push(Layer::new(graph, fan_in, spec.size, spec.activation, initializer, rng)?);
            fan_in = spec.size;
        }
        let mlp = Mlp {
            layers,
            nin: config.nin,
        };
        log::debug!(
            "Built MLP {} -> {:?} with {} parameters",
            mlp.nin,
            config.layers.iter().map(|l| l.size).collect::<Vec<_>>(),
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Lifts raw input values into fresh leaves and runs [`Module::forward`].
    pub fn forward_values(&self, graph: &mut Graph, input: &[f64]) -> Result<Vec<NodeId>, MicrogradError> {
        if input.len() != self.nin {
            return Err(MicrogradError::InputSizeMismatch {
                expected: self.nin,
                actual: input.len(),
                operation: "Mlp::forward_values".to_string(),
            });
        }
        let leaves: Vec<NodeId> = input.iter().map(|&x| graph.constant(x)).collect();
        self.forward(graph, &leaves)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrogradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed("layers", i, l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
