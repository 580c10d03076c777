use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::nn::{Init, Module, Parameter};
use crate::ops::traits::MugradScalar;
use rand::distributions::Distribution;
use rand::Rng;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Linear,
}

/// A single neuron: `act(w . x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron<T: MugradScalar> {
    weights: Vec<Parameter<T>>,
    bias: Parameter<T>,
    activation: Activation,
}

impl<T: MugradScalar> Neuron<T> {
    /// Creates a neuron with `nin` inputs, drawing weights and bias from `init`.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, MugradError> {
        let sampler = init.sampler()?;
        let weights = (0..nin)
            .map(|_| Parameter::new(T::from_f64(sampler.sample(&mut *rng))))
            .collect();
        let bias = Parameter::new(T::from_f64(sampler.sample(&mut *rng)));
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Creates a neuron with explicit weights and bias.
    pub fn from_values(weights: Vec<T>, bias: T, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Parameter<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter<T> {
        &self.bias
    }
}

impl<T: MugradScalar> Module<T> for Neuron<T> {
    fn forward(
        &mut self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, MugradError> {
        if inputs.len() != self.weights.len() {
            return Err(MugradError::InputArity {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut terms = Vec::with_capacity(inputs.len() + 1);
        for (i, (w, &x)) in self.weights.iter_mut().zip(inputs).enumerate() {
            let w = w.bind(graph, format!("w{}", i));
            terms.push(graph.mul(x, w, format!("x{}*w{}", i, i)));
        }
        terms.push(self.bias.bind(graph, "b"));
        let n = graph.sum(&terms, "n");

        let out = match self.activation {
            Activation::Tanh => graph.tanh(n, "tanh"),
            Activation::Relu => graph.relu(n, "relu"),
            Activation::Linear => n,
        };
        Ok(vec![out])
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.weights
            .iter()
            .chain(std::iter::once(&self.bias))
            .collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter<T>> {
        self.weights
            .iter_mut()
            .chain(std::iter::once(&mut self.bias))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
