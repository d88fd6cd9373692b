use crate::autograd::{Graph, NodeId};
use crate::error::MicrogradError;

/// The base trait for every network component (neuron, layer, network).
///
/// Parameters are leaf nodes owned by the [`Graph`] the module was built in;
/// a module only remembers their ids. Forward passes append interior nodes to
/// that same graph.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass on already-lifted input nodes.
    ///
    /// Returns one output node per unit of the module, or
    /// `InputSizeMismatch` if `inputs` does not match the module's fan-in.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrogradError>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Parameters with hierarchical, dot-separated names
    /// (e.g. `"layers.0.neurons.1.w.2"`). Same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name of a child's `named_parameters` with `prefix.index.`.
pub(crate) fn prefixed(prefix: &str, index: usize, named: Vec<(String, NodeId)>) -> Vec<(String, NodeId)> {
    named
        .into_iter()
        .map(|(name, id)| (format!("{prefix}.{index}.{name}"), id))
        .collect()
}
