use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::nn::{Activation, Init, Layer, Module, Parameter};
use crate::ops::traits::MugradScalar;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Multi-layer perceptron. Hidden layers use tanh; the output layer is linear.
#[derive(Debug, Clone)]
pub struct Mlp<T: MugradScalar> {
    layers: Vec<Layer<T>>,
}

impl<T: MugradScalar> Mlp<T> {
    /// Creates an MLP with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// # Errors
    /// [`MugradError::InvalidConfig`] if `nouts` is empty or any width is zero,
    /// or if `init` is invalid.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MugradError> {
        if nin == 0 || nouts.is_empty() || nouts.contains(&0) {
            return Err(MugradError::InvalidConfig(format!(
                "MLP needs non-zero widths, got nin={} nouts={:?}",
                nin, nouts
            )));
        }
        let mut layers = Vec::with_capacity(nouts.len());
        let mut width = nin;
        for (i, &nout) in nouts.iter().enumerate() {
            let activation = if i + 1 == nouts.len() {
                Activation::Linear
            } else {
                Activation::Tanh
            };
            layers.push(Layer::new(width, nout, activation, init, &mut *rng)?);
            width = nout;
        }
        debug!("Mlp: built {} layers from {} inputs", layers.len(), nin);
        Ok(Mlp { layers })
    }

    /// Same as [`Mlp::new`] with the default init and a `StdRng` seeded from `seed`.
    pub fn seeded(nin: usize, nouts: &[usize], seed: u64) -> Result<Self, MugradError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(nin, nouts, &Init::default(), &mut rng)
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }
}

impl<T: MugradScalar> Module<T> for Mlp<T> {
    fn forward(
        &mut self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, MugradError> {
        let mut x = inputs.to_vec();
        for layer in self.layers.iter_mut() {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter<T>> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.parameters_mut())
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
