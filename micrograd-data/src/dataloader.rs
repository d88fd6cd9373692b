//! # DataLoader
//!
//! Groups dataset items into fixed-size batches, drawing indices from a
//! [`Sampler`] once per epoch.
//!
//! ```rust
//! use micrograd_data::dataloader::DataLoader;
//! use micrograd_data::datasets::VecDataset;
//! use micrograd_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).expect("valid batch size");
//! let batches: Vec<Vec<i32>> = loader.iter().collect::<Result<_, _>>().expect("in-range indices");
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use micrograd_core::MicrogradError;

/// Batching front-end over a dataset and a sampler.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// * `drop_last`: skip the final batch when it is smaller than `batch_size`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `batch_size` is 0.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, MicrogradError> {
        if batch_size == 0 {
            return Err(MicrogradError::InvalidConfig(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch.
    pub fn iter(&self) -> Batches<'_, D> {
        Batches {
            dataset: &self.dataset,
            indices: self.sampler.iter(self.dataset.len()),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

/// One epoch of batches; see [`DataLoader::iter`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, MicrogradError>;

    /// `Some(Err(_))` if the dataset rejects an index; `None` once the
    /// sampler is exhausted (or only a short batch is left and `drop_last` is set).
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            if let Some(idx) = self.indices.next() {
                match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
