use super::*;
use approx::assert_relative_eq;

#[test]
fn test_mse_value_and_gradient() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let preds: Vec<NodeId> = [0.5, -1.0, 2.0].iter().map(|&v| g.constant(v)).collect();
    let loss = mse_loss(&mut g, &preds, &[1.0, -1.0, 0.0])?;

    // 0.25 + 0 + 4
    assert_relative_eq!(g.value(loss)?, 4.25, epsilon = 1e-12);

    g.backward(loss)?;
    assert_relative_eq!(g.grad(preds[0])?, -1.0, epsilon = 1e-12);
    assert_relative_eq!(g.grad(preds[1])?, 0.0, epsilon = 1e-12);
    assert_relative_eq!(g.grad(preds[2])?, 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_length_mismatch() {
    let mut g = Graph::new();
    let p = g.constant(1.0);
    assert!(matches!(
        mse_loss(&mut g, &[p], &[1.0, 2.0]),
        Err(MicrogradError::InputSizeMismatch { expected: 1, actual: 2, .. })
    ));
}

#[test]
fn test_mse_empty_is_zero() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let loss = mse_loss(&mut g, &[], &[])?;
    assert_eq!(g.value(loss)?, 0.0);
    Ok(())
}
