//! Optimizers for training networks built on the scalar engine.
//!
//! An optimizer holds the ids of the parameter leaves it updates and reads
//! their accumulated gradients straight out of the [`Graph`](crate::Graph).

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
