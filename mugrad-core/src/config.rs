//! Configuration for the graph engine and the numerical gradient checker.

use crate::error::MugradError;

/// How [`Graph::backward`](crate::Graph::backward) treats gradients left over
/// from a previous pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradMode {
    /// Reachable interior nodes are recomputed from zero on every pass while leaves
    /// keep accumulating. Two passes over the same root without a manual reset
    /// double the leaf gradients, which is what summed-loss accumulation relies on.
    #[default]
    Accumulate,
    /// Every node reachable from the root is zeroed before the root is seeded.
    ResetReachable,
}

/// Engine-level settings carried by a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub grad_mode: GradMode,
}

impl GraphConfig {
    /// Returns a copy of this config with the given gradient mode.
    pub fn with_grad_mode(mut self, grad_mode: GradMode) -> Self {
        self.grad_mode = grad_mode;
        self
    }
}

/// Tolerances for [`check_grad`](crate::autograd::grad_check::check_grad).
///
/// These are lower bounds: the checker raises them to what the graph's scalar
/// type can resolve, so the defaults work for `f32` as well as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step.
    pub epsilon: f64,
    /// Absolute tolerance.
    pub abs_tol: f64,
    /// Relative tolerance, scaled by the magnitude of the numerical gradient.
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tol: 1e-6,
            rel_tol: 1e-4,
        }
    }
}

impl GradCheckConfig {
    /// Validates the tolerances. `epsilon` must be strictly positive and finite,
    /// both tolerances non-negative and finite.
    pub fn validate(&self) -> Result<(), MugradError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(MugradError::InvalidConfig(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if !(self.abs_tol.is_finite() && self.abs_tol >= 0.0) {
            return Err(MugradError::InvalidConfig(format!(
                "abs_tol must be finite and >= 0, got {}",
                self.abs_tol
            )));
        }
        if !(self.rel_tol.is_finite() && self.rel_tol >= 0.0) {
            return Err(MugradError::InvalidConfig(format!(
                "rel_tol must be finite and >= 0, got {}",
                self.rel_tol
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
