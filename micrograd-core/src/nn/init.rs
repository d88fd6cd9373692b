use crate::error::MicrogradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use std::str::FromStr;

/// Distribution weights and biases are drawn from when a neuron is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Initializer {
    /// Uniform on `[0, 1)`.
    ZeroToOne,
    /// Uniform on `[-1, 1)`.
    #[default]
    NegOneToOne,
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Initializer {
    /// Checks that the distribution can be constructed.
    pub fn validate(&self) -> Result<(), MicrogradError> {
        if let Initializer::Normal { mean, std } = *self {
            Normal::new(mean, std).map_err(|e| {
                MicrogradError::InvalidConfig(format!(
                    "Normal initializer (mean {mean}, std {std}): {e}"
                ))
            })?;
        }
        Ok(())
    }

    /// Draws `n` independent values.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, MicrogradError> {
        match *self {
            Initializer::ZeroToOne => Ok(draw(&Uniform::new(0.0, 1.0), n, rng)),
            Initializer::NegOneToOne => Ok(draw(&Uniform::new(-1.0, 1.0), n, rng)),
            Initializer::Normal { mean, std } => {
                let normal = Normal::new(mean, std).map_err(|e| {
                    MicrogradError::InvalidConfig(format!(
                        "Normal initializer (mean {mean}, std {std}): {e}"
                    ))
                })?;
                Ok(draw(&normal, n, rng))
            }
        }
    }
}

fn draw<D: Distribution<f64>, R: Rng + ?Sized>(dist: &D, n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| dist.sample(rng)).collect()
}

impl FromStr for Initializer {
    type Err = MicrogradError;

    /// Parses the two uniform variants; `Normal` needs parameters and is built directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero_to_one" => Ok(Initializer::ZeroToOne),
            "neg_one_to_one" => Ok(Initializer::NegOneToOne),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported initializer: {}",
                s
            ))),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
