use super::check_lengths;
use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;

/// Summed squared error `Σ (pᵢ − tᵢ)²`.
///
/// Targets are lifted to constant leaves; gradient flows only into the
/// predictions. Empty inputs give a constant 0.
pub fn mse_loss(graph: &mut Graph, predictions: &[NodeId], targets: &[f64]) -> Result<NodeId, MicrogradError> {
    check_lengths("mse_loss", predictions, targets)?;

    let mut terms = Vec::with_capacity(predictions.len());
    for (&p, &t) in predictions.iter().zip(targets) {
        let target = graph.constant(t);
        let diff = graph.sub(p, target)?;
        terms.push(graph.pow(diff, 2.0)?);
    }
    graph.sum(&terms)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
