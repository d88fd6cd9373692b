pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::{cross_entropy_loss, softmax};
pub use mse::mse_loss;

use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use std::fmt;
use std::str::FromStr;

/// Loss selected by name in training configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loss {
    #[default]
    Mse,
    CrossEntropy,
}

impl Loss {
    /// Builds the loss node for one sample.
    pub fn compute(
        self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[f64],
    ) -> Result<NodeId, MicrogradError> {
        match self {
            Loss::Mse => mse_loss(graph, predictions, targets),
            Loss::CrossEntropy => cross_entropy_loss(graph, predictions, targets),
        }
    }
}

impl FromStr for Loss {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mse" => Ok(Loss::Mse),
            "cross_entropy" | "crossentropy" => Ok(Loss::CrossEntropy),
            _ => Err(MicrogradError::UnsupportedOperation(format!("Unsupported loss: {}", s))),
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loss::Mse => f.write_str("mse"),
            Loss::CrossEntropy => f.write_str("cross_entropy"),
        }
    }
}

pub(crate) fn check_lengths(
    operation: &str,
    predictions: &[NodeId],
    targets: &[f64],
) -> Result<(), MicrogradError> {
    if predictions.len() != targets.len() {
        return Err(MicrogradError::InputSizeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
