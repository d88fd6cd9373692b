use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_softmax_sums_to_one() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let logits: Vec<NodeId> = [1.0, 2.0, 3.0].iter().map(|&v| g.constant(v)).collect();
    let probs = softmax(&mut g, &logits)?;

    let denom = 1f64.exp() + 2f64.exp() + 3f64.exp();
    let mut total = 0.0;
    for (p, z) in probs.iter().zip([1.0f64, 2.0, 3.0]) {
        let v = g.value(*p)?;
        assert_relative_eq!(v, z.exp() / denom, epsilon = 1e-12);
        total += v;
    }
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    assert!(softmax(&mut g, &[])?.is_empty());
    Ok(())
}

#[test]
fn test_cross_entropy_value_and_gradient() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let logits: Vec<NodeId> = [2.0, 1.0, 0.1].iter().map(|&v| g.constant(v)).collect();
    let targets = [0.0, 1.0, 0.0];
    let loss = cross_entropy_loss(&mut g, &logits, &targets)?;

    let exps: Vec<f64> = [2.0f64, 1.0, 0.1].iter().map(|z| z.exp()).collect();
    let denom: f64 = exps.iter().sum();
    assert_relative_eq!(g.value(loss)?, -(exps[1] / denom).ln(), epsilon = 1e-12);

    // d loss / d z_i = softmax_i - t_i for one-hot targets
    g.backward(loss)?;
    for i in 0..3 {
        assert_relative_eq!(g.grad(logits[i])?, exps[i] / denom - targets[i], epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_cross_entropy_large_logits_stay_finite() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let logits: Vec<NodeId> = [1000.0, -1000.0].iter().map(|&v| g.constant(v)).collect();
    let loss = cross_entropy_loss(&mut g, &logits, &[0.0, 1.0])?;
    assert_relative_eq!(g.value(loss)?, 2000.0, epsilon = 1e-9);
    g.backward(loss)?;
    assert!(g.grad(logits[0])?.is_finite());
    Ok(())
}

#[test]
fn test_cross_entropy_errors() {
    let mut g = Graph::new();
    let z = g.constant(0.0);
    assert!(matches!(
        cross_entropy_loss(&mut g, &[z], &[1.0, 0.0]),
        Err(MicrogradError::InputSizeMismatch { .. })
    ));
    assert!(matches!(
        cross_entropy_loss(&mut g, &[], &[]),
        Err(MicrogradError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_cross_entropy_matches_finite_differences() -> Result<(), GradCheckError> {
    check_grad(
        |g, xs| cross_entropy_loss(g, xs, &[0.2, 0.0, 0.8]),
        &[0.3, -1.2, 0.9],
        1e-6,
        1e-4,
    )
}
