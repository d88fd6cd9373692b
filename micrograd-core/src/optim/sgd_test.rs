use super::*;
use approx::assert_relative_eq;

// Helper: leaves with the given values and gradients already set
fn params_with_grads(g: &mut Graph, values: &[f64], grads: &[f64]) -> Result<Vec<NodeId>, MicrogradError> {
    let mut ids = Vec::new();
    for (&v, &gr) in values.iter().zip(grads) {
        let id = g.constant(v);
        g.set_grad(id, gr)?;
        ids.push(id);
    }
    Ok(ids)
}

#[test]
fn test_sgd_basic_step() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let params = params_with_grads(&mut g, &[1.0, 2.0, 3.0, 4.0], &[0.1, 0.2, 0.3, 0.4])?;
    let mut opt = Sgd::new(params.clone(), 0.1);

    opt.step(&mut g)?;
    for (i, &p) in params.iter().enumerate() {
        let expected = (i + 1) as f64 - 0.1 * 0.1 * (i + 1) as f64;
        assert_relative_eq!(g.value(p)?, expected, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let params = params_with_grads(&mut g, &[2.0], &[0.5])?;
    let mut opt = Sgd::new(params.clone(), 0.1).with_weight_decay(0.01);

    opt.step(&mut g)?;
    // 2 - 0.1 * (0.5 + 0.01 * 2)
    assert_relative_eq!(g.value(params[0])?, 1.948, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum_accumulates_velocity() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let params = params_with_grads(&mut g, &[1.0], &[1.0])?;
    let p = params[0];
    let mut opt = Sgd::new(params, 0.1).with_momentum(0.9);

    opt.step(&mut g)?;
    assert_relative_eq!(opt.momentum_buffer(p).unwrap_or(f64::NAN), 1.0, epsilon = 1e-12);
    assert_relative_eq!(g.value(p)?, 0.9, epsilon = 1e-12);

    // same gradient again: v = 0.9 * 1 + 1 = 1.9
    opt.step(&mut g)?;
    assert_relative_eq!(opt.momentum_buffer(p).unwrap_or(f64::NAN), 1.9, epsilon = 1e-12);
    assert_relative_eq!(g.value(p)?, 0.9 - 0.19, epsilon = 1e-12);

    opt.reset_state();
    assert_eq!(opt.momentum_buffer(p), None);
    Ok(())
}

#[test]
fn test_sgd_zero_grad_and_learning_rate() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let params = params_with_grads(&mut g, &[1.0, -1.0], &[3.0, -2.0])?;
    let mut opt = Sgd::new(params.clone(), 0.5);

    opt.zero_grad(&mut g)?;
    for &p in &params {
        assert_eq!(g.grad(p)?, 0.0);
    }

    assert_eq!(opt.learning_rate(), 0.5);
    opt.set_learning_rate(0.01);
    assert_eq!(opt.learning_rate(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_rejects_interior_parameter() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let a = g.constant(1.0);
    let b = g.constant(2.0);
    let c = g.add(a, b)?;
    let mut opt = Sgd::new(vec![c], 0.1);
    assert_eq!(opt.step(&mut g), Err(MicrogradError::NotALeaf { id: c.index() }));
    Ok(())
}

#[test]
fn test_sgd_descends_a_quadratic() -> Result<(), MicrogradError> {
    // minimise (w - 3)^2
    let mut g = Graph::new();
    let w = g.constant(0.0);
    let mark = g.checkpoint();
    let mut opt = Sgd::new(vec![w], 0.1);

    for _ in 0..100 {
        opt.zero_grad(&mut g)?;
        let three = g.constant(3.0);
        let d = g.sub(w, three)?;
        let loss = g.pow(d, 2.0)?;
        g.backward(loss)?;
        opt.step(&mut g)?;
        g.truncate(mark);
    }
    assert_relative_eq!(g.value(w)?, 3.0, epsilon = 1e-6);
    Ok(())
}
