//! Two-class classifier over RGB triples in `[0, 1]`.

use micrograd_core::nn::{Activation, Initializer, LayerSpec, Loss, MlpConfig};
use micrograd_data::{Sample, Trainer, TrainerConfig, VecDataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dataset = VecDataset::new(vec![
        Sample::new(vec![0.03, 0.7, 0.5], vec![1.0, 0.0]),
        Sample::new(vec![0.16, 0.09, 0.2], vec![0.0, 1.0]),
        Sample::new(vec![0.5, 0.5, 1.0], vec![0.0, 1.0]),
    ]);

    let config = TrainerConfig {
        network: MlpConfig::new(
            3,
            vec![
                LayerSpec::new(4, Activation::Tanh),
                LayerSpec::new(4, Activation::Tanh),
                LayerSpec::new(2, Activation::Tanh),
            ],
        ),
        initializer: Initializer::ZeroToOne,
        loss: Loss::Mse,
        epochs: 1000,
        batch_size: 100,
        learning_rate: 0.05,
        ..TrainerConfig::default()
    };

    let mut trainer = Trainer::new(config)?;
    println!("Training");
    let report = trainer.fit(&dataset)?;
    println!("final loss: {:.6}", report.final_loss().unwrap_or(f64::NAN));
    println!("accuracy on training set: {:.2}", trainer.accuracy(&dataset)?);

    println!("[1.0, 0.4, 0.0] -> {:?}", trainer.predict(&[1.0, 0.4, 0.0])?);
    Ok(())
}
