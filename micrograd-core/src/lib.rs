//! Scalar-valued reverse-mode automatic differentiation, plus a small
//! feed-forward network built on top of it.
//!
//! The engine lives in [`autograd`]: every arithmetic or activation call on a
//! [`Graph`] appends a node recording its operands, and [`Graph::backward`]
//! pushes gradients from a root back to every reachable leaf.

pub mod autograd;
pub mod nn;
pub mod optim;

pub mod error;

pub use autograd::{Graph, NodeId, Op};
pub use error::MicrogradError;
