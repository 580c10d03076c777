use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::nn::Parameter;
use crate::ops::traits::MugradScalar;
use std::fmt::Debug;

/// The base trait for all scalar network modules (neurons, layers, MLPs).
pub trait Module<T: MugradScalar>: Debug {
    /// Performs a forward pass, binding this module's parameters into `graph`.
    ///
    /// # Errors
    /// [`MugradError::InputArity`] if `inputs` does not have the expected width.
    fn forward(&mut self, graph: &mut Graph<T>, inputs: &[NodeId])
        -> Result<Vec<NodeId>, MugradError>;

    /// All learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter<T>>;

    fn parameters_mut(&mut self) -> Vec<&mut Parameter<T>>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
