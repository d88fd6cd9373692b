use super::*;

#[test]
fn test_loss_from_str() {
    assert_eq!("mse".parse::<Loss>(), Ok(Loss::Mse));
    assert_eq!("MSE".parse::<Loss>(), Ok(Loss::Mse));
    assert_eq!("cross_entropy".parse::<Loss>(), Ok(Loss::CrossEntropy));
    assert_eq!("CROSS_ENTROPY".parse::<Loss>(), Ok(Loss::CrossEntropy));
    assert!("hinge".parse::<Loss>().is_err());
    assert_eq!(Loss::CrossEntropy.to_string(), "cross_entropy");
}

#[test]
fn test_loss_compute_dispatches() -> Result<(), MicrogradError> {
    let mut g = Graph::new();
    let p = g.constant(3.0);
    let mse = Loss::Mse.compute(&mut g, &[p], &[1.0])?;
    assert_eq!(g.value(mse)?, 4.0);

    let ce = Loss::CrossEntropy.compute(&mut g, &[p], &[1.0])?;
    // a single class always has probability 1
    assert!(g.value(ce)?.abs() < 1e-12);
    Ok(())
}
