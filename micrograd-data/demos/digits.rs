//! Digit classification from a CSV of `label,pixel0,...,pixel783` rows.
//!
//! `cargo run --release -p micrograd-data --example digits -- [path] [epochs]`
//! (defaults: `./trainData/train.csv`, 1 epoch). Every scalar is a graph node,
//! so expect this to be slow on the full file.

use micrograd_core::nn::{Activation, Initializer, LayerSpec, Loss, MlpConfig};
use micrograd_data::{load_csv, CsvOptions, Trainer, TrainerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "./trainData/train.csv".to_string());
    let epochs = args.next().map(|e| e.parse::<usize>()).transpose()?.unwrap_or(1);

    println!("Parsing CSV");
    let dataset = load_csv(&path, &CsvOptions::digits())?;

    let config = TrainerConfig {
        network: MlpConfig::new(
            784,
            vec![
                LayerSpec::new(100, Activation::Relu),
                LayerSpec::new(10, Activation::Linear),
            ],
        ),
        initializer: Initializer::Normal { mean: 0.0, std: 0.05 },
        loss: Loss::CrossEntropy,
        epochs,
        batch_size: 20,
        learning_rate: 0.03,
        ..TrainerConfig::default()
    };

    let mut trainer = Trainer::new(config)?;
    println!("Training");
    trainer.fit(&dataset)?;
    println!("accuracy on training set: {:.4}", trainer.accuracy(&dataset)?);
    Ok(())
}
