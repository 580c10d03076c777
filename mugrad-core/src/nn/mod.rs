//! Scalar neural-network building blocks on top of the graph engine.
//!
//! Parameters hold their values outside any graph. A forward pass binds each
//! parameter to a fresh leaf, so node values stay immutable and a training step
//! rebuilds the graph after the optimiser has moved the parameters.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use init::Init;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use module::Module;
pub use parameter::Parameter;
