use super::check_lengths;
use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;

/// Subtracts the largest logit (as a constant) and exponentiates.
///
/// Returns the shifted logits, their exponentials and `Σ exp` as nodes. The
/// maximum term is `exp(0) = 1`, so the sum is at least 1 for finite logits.
fn shifted_exps(
    graph: &mut Graph,
    logits: &[NodeId],
) -> Result<(Vec<NodeId>, Vec<NodeId>, NodeId), MicrogradError> {
    let mut max = f64::NEG_INFINITY;
    for &z in logits {
        max = max.max(graph.value(z)?);
    }
    let shift = graph.constant(max);

    let mut shifted = Vec::with_capacity(logits.len());
    let mut exps = Vec::with_capacity(logits.len());
    for &z in logits {
        let s = graph.sub(z, shift)?;
        exps.push(graph.exp(s)?);
        shifted.push(s);
    }
    let total = graph.sum(&exps)?;
    Ok((shifted, exps, total))
}

/// Probabilities `exp(zᵢ) / Σ exp(zⱼ)`, computed on shifted logits.
pub fn softmax(graph: &mut Graph, logits: &[NodeId]) -> Result<Vec<NodeId>, MicrogradError> {
    if logits.is_empty() {
        return Ok(Vec::new());
    }
    let (_, exps, total) = shifted_exps(graph, logits)?;
    exps.into_iter().map(|e| graph.div(e, total)).collect()
}

/// `−Σ tᵢ · log softmax(z)ᵢ`.
///
/// Uses `log softmax(z)ᵢ = (zᵢ − m) − log Σ exp(zⱼ − m)` with `m` the largest
/// logit, so `log` only ever sees a sum ≥ 1. Classes with a zero target add
/// no term.
pub fn cross_entropy_loss(
    graph: &mut Graph,
    logits: &[NodeId],
    targets: &[f64],
) -> Result<NodeId, MicrogradError> {
    check_lengths("cross_entropy_loss", logits, targets)?;
    if logits.is_empty() {
        return Err(MicrogradError::UnsupportedOperation(
            "cross_entropy_loss needs at least one logit".to_string(),
        ));
    }

    let (shifted, _, total) = shifted_exps(graph, logits)?;
    let log_total = graph.log(total)?;

    let mut terms = Vec::new();
    for (&s, &t) in shifted.iter().zip(targets) {
        if t == 0.0 {
            continue;
        }
        let log_p = graph.sub(s, log_total)?;
        let weight = graph.constant(t);
        terms.push(graph.mul(log_p, weight)?);
    }
    let total_log_likelihood = graph.sum(&terms)?;
    graph.neg(total_log_likelihood)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
