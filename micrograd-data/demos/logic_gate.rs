//! Trains a small tanh network on the AND gate.
//!
//! `cargo run -p micrograd-data --example logic_gate -- [loss]` where `loss`
//! is `mse` (default) or `cross_entropy`.

use micrograd_core::nn::{Activation, Initializer, LayerSpec, Loss, MlpConfig};
use micrograd_data::{Sample, Trainer, TrainerConfig, VecDataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let loss: Loss = std::env::args().nth(1).as_deref().unwrap_or("mse").parse()?;
    let dataset = VecDataset::new(vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![1.0, 0.0], vec![0.0]),
        Sample::new(vec![1.0, 1.0], vec![1.0]),
        Sample::new(vec![0.0, 1.0], vec![0.0]),
    ]);

    let config = TrainerConfig {
        network: MlpConfig::new(
            2,
            vec![
                LayerSpec::new(4, Activation::Tanh),
                LayerSpec::new(4, Activation::Tanh),
                LayerSpec::new(1, Activation::Tanh),
            ],
        ),
        initializer: Initializer::NegOneToOne,
        loss,
        epochs: 1000,
        batch_size: 100,
        learning_rate: 0.05,
        ..TrainerConfig::default()
    };

    let mut trainer = Trainer::new(config)?;
    println!("Training");
    let report = trainer.fit(&dataset)?;
    println!(
        "loss: {:.6} -> {:.6}",
        report.initial_loss().unwrap_or(f64::NAN),
        report.final_loss().unwrap_or(f64::NAN)
    );

    for input in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        println!("{:?} -> {:?}", input, trainer.predict(&input)?);
    }
    Ok(())
}
