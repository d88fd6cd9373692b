pub mod csv_dataset;
pub mod sample;
pub mod traits;
pub mod vec_dataset;

pub use csv_dataset::{load_csv, parse_csv, CsvOptions, Normalization};
pub use sample::Sample;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
