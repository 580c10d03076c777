use crate::error::MugradError;
use crate::graph::Graph;
use crate::nn::Module;
use crate::ops::traits::MugradScalar;
use log::{debug, warn};

/// Plain stochastic gradient descent: `value -= lr * grad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Creates an optimiser with learning rate `lr`.
    ///
    /// # Errors
    /// [`MugradError::InvalidConfig`] unless `lr` is finite and positive.
    pub fn new(lr: f64) -> Result<Self, MugradError> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(MugradError::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {}",
                lr
            )));
        }
        Ok(Sgd { lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), MugradError> {
        *self = Sgd::new(lr)?;
        Ok(())
    }

    /// Moves every parameter of `module` against its gradient in `graph`.
    ///
    /// Parameters without a gradient in `graph` (never bound, or bound to another
    /// graph) are left untouched. Returns the number of parameters updated.
    pub fn step<T, M>(&self, graph: &Graph<T>, module: &mut M) -> usize
    where
        T: MugradScalar,
        M: Module<T> + ?Sized,
    {
        let lr = T::from_f64(self.lr);
        let mut updated = 0;
        for (idx, param) in module.parameters_mut().into_iter().enumerate() {
            match param.grad(graph) {
                Some(grad) => {
                    param.set_value(param.value() - lr * grad);
                    updated += 1;
                }
                None => {
                    warn!("Sgd: no gradient for parameter {}, skipping update.", idx);
                }
            }
        }
        debug!("Sgd: step updated {} parameters (lr = {})", updated, self.lr);
        updated
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
