use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicrogradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Graph error during gradient check: {0}")]
    GraphError(MicrogradError),
}

impl From<MicrogradError> for GradCheckError {
    fn from(err: MicrogradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Builds a fresh graph with one leaf per input and evaluates `func` on it.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, MicrogradError>,
{
    let mut graph = Graph::with_capacity(inputs.len() * 4);
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.constant(x)).collect();
    let root = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, root))
}

/// Central finite difference `(f(x + eps) - f(x - eps)) / 2 eps` for every input.
pub fn numerical_gradient<F>(func: F, inputs: &[f64], epsilon: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, MicrogradError>,
{
    (0..inputs.len())
        .map(|i| central_difference(&func, inputs, i, epsilon).map(|diff| diff.gradient))
        .collect()
}

/// Finite-difference estimate for one input, with the two losses it came from.
struct CentralDifference {
    gradient: f64,
    loss_plus: f64,
    loss_minus: f64,
}

fn central_difference<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    epsilon: f64,
) -> Result<CentralDifference, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, MicrogradError>,
{
    let mut shifted = inputs.to_vec();

    shifted[index] = inputs[index] + epsilon;
    let (graph, _, root) = evaluate(func, &shifted)?;
    let loss_plus = graph.value(root)?;

    shifted[index] = inputs[index] - epsilon;
    let (graph, _, root) = evaluate(func, &shifted)?;
    let loss_minus = graph.value(root)?;

    Ok(CentralDifference {
        gradient: (loss_plus - loss_minus) / (2.0 * epsilon),
        loss_plus,
        loss_minus,
    })
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and returns
/// the root to differentiate. A gradient passes when it is within `tolerance`
/// of the numerical estimate, either absolutely or relatively.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, MicrogradError>,
{
    let (mut graph, leaves, root) = evaluate(&func, inputs)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(leaf)?;
        let diff = central_difference(&func, inputs, i, epsilon)?;
        let numerical_grad = diff.gradient;

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: diff.loss_plus,
                loss_minus: diff.loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad passed for {} inputs", inputs.len());
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
