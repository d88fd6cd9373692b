use micrograd_core::nn::{Initializer, Loss, MlpConfig};
use micrograd_core::MicrogradError;

/// Everything needed to build and train a network.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub network: MlpConfig,
    pub initializer: Initializer,
    pub loss: Loss,
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    /// SGD momentum in `[0, 1)`; 0 disables it.
    pub momentum: f64,
    /// Draw a fresh random order every epoch instead of going through rows in file order.
    pub shuffle: bool,
    /// Seeds both parameter initialisation and shuffling.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            network: MlpConfig::default(),
            initializer: Initializer::NegOneToOne,
            loss: Loss::Mse,
            epochs: 1000,
            batch_size: 100,
            learning_rate: 0.05,
            momentum: 0.0,
            shuffle: true,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), MicrogradError> {
        self.network.validate()?;
        self.initializer.validate()?;
        if self.epochs == 0 {
            return Err(MicrogradError::InvalidConfig("epochs must be greater than 0".to_string()));
        }
        if self.batch_size == 0 {
            return Err(MicrogradError::InvalidConfig(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MicrogradError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(MicrogradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
