//! Datasets, batching and a fixed epoch/batch training loop for networks
//! built with `micrograd-core`.

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod trainer;

pub use dataloader::DataLoader;
pub use datasets::{load_csv, parse_csv, CsvOptions, Dataset, Normalization, Sample, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use trainer::{Trainer, TrainerConfig, TrainingReport};
