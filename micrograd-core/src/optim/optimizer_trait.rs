use crate::autograd::Graph;
use crate::error::MicrogradError;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Updates every managed parameter from its current gradient.
    ///
    /// Parameters are leaves, so the update goes through
    /// [`Graph::set_value`]. Nodes built from the old values are not
    /// recomputed; callers run a new forward pass afterwards.
    fn step(&mut self, graph: &mut Graph) -> Result<(), MicrogradError>;

    /// Sets the gradient of every managed parameter to 0.
    ///
    /// Called before the backward passes of a new batch so gradients do not
    /// accumulate across batches.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), MicrogradError>;

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);
}
