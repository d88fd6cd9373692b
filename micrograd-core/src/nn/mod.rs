//! Neurons, layers and a multi-layer perceptron expressed as nodes of a
//! [`Graph`](crate::autograd::Graph), plus the losses used to train them.

pub mod activation;
pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

pub use activation::Activation;
pub use init::Initializer;
pub use layer::Layer;
pub use losses::{cross_entropy_loss, mse_loss, softmax, Loss};
pub use mlp::{LayerSpec, Mlp, MlpConfig};
pub use module::Module;
pub use neuron::Neuron;
