use crate::config::GradCheckConfig;
use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {value_plus:?}, f(x-h): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Engine error during gradient check: {0}")]
    EngineError(MugradError),
}

impl From<MugradError> for GradCheckError {
    fn from(err: MugradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `build` receives a fresh graph and one leaf per entry of `inputs`, and returns
/// the output node. The analytical gradients come from a single backward pass;
/// for each input `i` the numerical gradient is `(f(x_i + h) - f(x_i - h)) / 2h`,
/// each side evaluated on its own graph. An input passes when
/// `|analytical - numerical| <= abs_tol + rel_tol * |numerical|`.
///
/// The step and tolerances from `config` are floored to what `T` can resolve:
/// `h >= cbrt(eps)` and both tolerances `>= sqrt(eps)`, with `eps` the machine
/// epsilon of `T`. `2h` is taken from the perturbed inputs as actually stored in `T`.
pub fn check_grad<T, F>(
    build: F,
    inputs: &[T],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    T: MugradScalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> NodeId,
{
    config.validate()?;
    let machine_eps = T::epsilon().as_f64();
    let step = config.epsilon.max(machine_eps.cbrt());
    let abs_tol = config.abs_tol.max(machine_eps.sqrt());
    let rel_tol = config.rel_tol.max(machine_eps.sqrt());

    let mut graph = Graph::new();
    let ids = bind_inputs(&mut graph, inputs);
    let output = build(&mut graph, &ids);
    graph.backward(output);

    for (input_index, &id) in ids.iter().enumerate() {
        let analytical_grad = graph.grad(id).as_f64();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let (x_plus, value_plus) = evaluate_perturbed(&build, inputs, input_index, step);
        let (x_minus, value_minus) = evaluate_perturbed(&build, inputs, input_index, -step);
        if !value_plus.is_finite() || !value_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value_plus,
                value_minus,
            });
        }
        let numerical_grad = (value_plus - value_minus) / (x_plus - x_minus);

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} h={} analytical={} numerical={} diff={}",
            input_index, step, analytical_grad, numerical_grad, difference
        );
        if difference > abs_tol + rel_tol * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn bind_inputs<T: MugradScalar>(graph: &mut Graph<T>, inputs: &[T]) -> Vec<NodeId> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, &value)| graph.leaf(value, format!("input{}", i)))
        .collect()
}

/// Evaluates `build` with input `index` shifted by `delta`. Returns the shifted
/// input as stored in `T` and the output value, both widened to `f64`.
fn evaluate_perturbed<T, F>(build: &F, inputs: &[T], index: usize, delta: f64) -> (f64, f64)
where
    T: MugradScalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> NodeId,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] = T::from_f64(perturbed[index].as_f64() + delta);
    let mut graph = Graph::new();
    let ids = bind_inputs(&mut graph, &perturbed);
    let output = build(&mut graph, &ids);
    (perturbed[index].as_f64(), graph.value(output).as_f64())
}
