use super::*;
use micrograd_core::nn::{Activation, LayerSpec};

#[test]
fn test_default_is_valid() {
    let config = TrainerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.epochs, 1000);
    assert_eq!(config.batch_size, 100);
    assert_eq!(config.loss, Loss::Mse);
}

#[test]
fn test_invalid_fields_are_rejected() {
    let cases = [
        TrainerConfig { epochs: 0, ..TrainerConfig::default() },
        TrainerConfig { batch_size: 0, ..TrainerConfig::default() },
        TrainerConfig { learning_rate: 0.0, ..TrainerConfig::default() },
        TrainerConfig { learning_rate: f64::NAN, ..TrainerConfig::default() },
        TrainerConfig { momentum: 1.0, ..TrainerConfig::default() },
        TrainerConfig { momentum: -0.1, ..TrainerConfig::default() },
        TrainerConfig {
            initializer: Initializer::Normal { mean: 0.0, std: -1.0 },
            ..TrainerConfig::default()
        },
        TrainerConfig {
            network: MlpConfig::new(3, vec![LayerSpec::new(0, Activation::Relu)]),
            ..TrainerConfig::default()
        },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(MicrogradError::InvalidConfig(_))),
            "{config:?} should be rejected"
        );
    }
}
