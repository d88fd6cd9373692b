use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    /// Identity; the pre-activation is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, x: NodeId) -> Result<NodeId, MicrogradError> {
        match self {
            Activation::Tanh => graph.tanh(x),
            Activation::Relu => graph.relu(x),
            Activation::Sigmoid => graph.sigmoid(x),
            Activation::Linear => {
                graph.value(x)?;
                Ok(x)
            }
        }
    }
}

impl FromStr for Activation {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            "linear" | "identity" => Ok(Activation::Linear),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "linear",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
