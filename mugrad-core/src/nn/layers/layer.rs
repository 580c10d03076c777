use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::nn::{Activation, Init, Module, Neuron, Parameter};
use crate::ops::traits::MugradScalar;
use rand::Rng;

/// A fully connected layer of independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer<T: MugradScalar> {
    neurons: Vec<Neuron<T>>,
}

impl<T: MugradScalar> Layer<T> {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MugradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Builds a layer from already constructed neurons.
    ///
    /// # Errors
    /// [`MugradError::InputArity`] if the neurons disagree on their input width.
    pub fn from_neurons(neurons: Vec<Neuron<T>>) -> Result<Self, MugradError> {
        if let Some(first) = neurons.first() {
            let nin = first.nin();
            if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
                return Err(MugradError::InputArity {
                    expected: nin,
                    actual: bad.nin(),
                    operation: "Layer::from_neurons".to_string(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }
}

impl<T: MugradScalar> Module<T> for Layer<T> {
    fn forward(
        &mut self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, MugradError> {
        let mut outputs = Vec::with_capacity(self.neurons.len());
        for neuron in self.neurons.iter_mut() {
            outputs.extend(neuron.forward(graph, inputs)?);
        }
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter<T>> {
        self.neurons
            .iter_mut()
            .flat_map(|n| n.parameters_mut())
            .collect()
    }
}
