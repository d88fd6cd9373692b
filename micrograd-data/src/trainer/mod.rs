//! Fixed epoch/batch training of an [`Mlp`] with SGD.

pub mod config;
pub mod report;

pub use config::TrainerConfig;
pub use report::TrainingReport;

use crate::dataloader::DataLoader;
use crate::datasets::{Dataset, Sample};
use crate::samplers::{RandomSampler, Sampler, SequentialSampler};
use micrograd_core::autograd::Checkpoint;
use micrograd_core::nn::{Mlp, Module};
use micrograd_core::optim::{Optimizer, Sgd};
use micrograd_core::{Graph, MicrogradError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns the graph holding the network's parameters and trains them.
///
/// Parameters are allocated first; everything a forward pass creates lives
/// after [`Trainer::checkpoint`] and is dropped once the sample is done.
#[derive(Debug)]
pub struct Trainer {
    config: TrainerConfig,
    graph: Graph,
    mlp: Mlp,
    optimizer: Sgd,
    checkpoint: Checkpoint,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self, MicrogradError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, &config.network, &config.initializer, &mut rng)?;
        let checkpoint = graph.checkpoint();
        let optimizer = Sgd::new(mlp.parameters(), config.learning_rate).with_momentum(config.momentum);

        Ok(Trainer {
            config,
            graph,
            mlp,
            optimizer,
            checkpoint,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn mlp(&self) -> &Mlp {
        &self.mlp
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Arena position right after the parameters.
    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }

    pub fn parameter_values(&self) -> Result<Vec<f64>, MicrogradError> {
        self.mlp
            .parameters()
            .into_iter()
            .map(|p| self.graph.value(p))
            .collect()
    }

    /// Trains for `config.epochs` epochs and returns the mean loss of each.
    ///
    /// Per batch: parameter gradients are zeroed, every sample's loss is
    /// scaled by `1 / batch_len` and back-propagated (gradients add up across
    /// the batch), then one optimizer step is taken.
    pub fn fit<D>(&mut self, dataset: &D) -> Result<TrainingReport, MicrogradError>
    where
        D: Dataset<Item = Sample> + ?Sized,
    {
        if dataset.is_empty() {
            return Err(MicrogradError::EmptyDataset);
        }

        let sampler: Box<dyn Sampler> = if self.config.shuffle {
            let sampler = RandomSampler::new(false, None);
            match self.config.seed {
                Some(seed) => Box::new(sampler.with_seed(seed)),
                None => Box::new(sampler),
            }
        } else {
            Box::new(SequentialSampler::new())
        };
        let loader = DataLoader::new(dataset, self.config.batch_size, sampler, false)?;

        let mut report = TrainingReport::default();
        for epoch in 0..self.config.epochs {
            let mut total = 0.0;
            let mut count = 0usize;
            for batch in loader.iter() {
                let batch = batch?;
                self.optimizer.zero_grad(&mut self.graph)?;
                let scale = 1.0 / batch.len() as f64;
                for sample in &batch {
                    total += self.accumulate(sample, scale)?;
                    count += 1;
                }
                self.optimizer.step(&mut self.graph)?;
            }

            let mean = total / count as f64;
            log::info!("Epoch {}/{}: mean loss {:.6}", epoch + 1, self.config.epochs, mean);
            report.epoch_losses.push(mean);
        }
        Ok(report)
    }

    /// Forward + backward for one sample; returns the unscaled loss.
    fn accumulate(&mut self, sample: &Sample, scale: f64) -> Result<f64, MicrogradError> {
        let result = self.sample_loss(sample, Some(scale));
        self.graph.truncate(self.checkpoint);
        result
    }

    /// Builds the loss of `sample`, back-propagating `scale * loss` when a
    /// scale is given. Leaves the per-sample nodes for the caller to truncate.
    fn sample_loss(&mut self, sample: &Sample, backward_scale: Option<f64>) -> Result<f64, MicrogradError> {
        let outputs = self.mlp.forward_values(&mut self.graph, &sample.input)?;
        let loss = self.config.loss.compute(&mut self.graph, &outputs, &sample.target)?;
        if let Some(scale) = backward_scale {
            let factor = self.graph.constant(scale);
            let scaled = self.graph.mul(loss, factor)?;
            self.graph.backward(scaled)?;
        }
        self.graph.value(loss)
    }

    fn output_values(&mut self, input: &[f64]) -> Result<Vec<f64>, MicrogradError> {
        let outputs = self.mlp.forward_values(&mut self.graph, input)?;
        outputs.iter().map(|&o| self.graph.value(o)).collect()
    }

    /// Network outputs for one input.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>, MicrogradError> {
        let result = self.output_values(input);
        self.graph.truncate(self.checkpoint);
        result
    }

    /// Mean loss over `dataset` without touching gradients.
    pub fn evaluate<D>(&mut self, dataset: &D) -> Result<f64, MicrogradError>
    where
        D: Dataset<Item = Sample> + ?Sized,
    {
        if dataset.is_empty() {
            return Err(MicrogradError::EmptyDataset);
        }
        let mut total = 0.0;
        for i in 0..dataset.len() {
            let sample = dataset.get(i)?;
            let result = self.sample_loss(&sample, None);
            self.graph.truncate(self.checkpoint);
            total += result?;
        }
        Ok(total / dataset.len() as f64)
    }

    /// Fraction of samples whose largest output matches the largest target.
    pub fn accuracy<D>(&mut self, dataset: &D) -> Result<f64, MicrogradError>
    where
        D: Dataset<Item = Sample> + ?Sized,
    {
        if dataset.is_empty() {
            return Err(MicrogradError::EmptyDataset);
        }
        let mut correct = 0usize;
        for i in 0..dataset.len() {
            let sample = dataset.get(i)?;
            let prediction = self.predict(&sample.input)?;
            match (argmax(&prediction), argmax(&sample.target)) {
                (Some(p), Some(t)) if p == t => correct += 1,
                _ => {}
            }
        }
        Ok(correct as f64 / dataset.len() as f64)
    }
}

/// Index of the first largest value; `None` for an empty slice.
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
