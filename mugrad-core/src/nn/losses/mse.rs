use crate::error::MugradError;
use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;

/// Mean squared error between `preds` and plain-number `targets`.
///
/// Builds `sum((p_i - t_i)^2) / n` and returns the node labelled `loss`.
///
/// # Errors
/// [`MugradError::InputArity`] if the lengths differ,
/// [`MugradError::EmptyInput`] if both are empty.
pub fn mse<T: MugradScalar>(
    graph: &mut Graph<T>,
    preds: &[NodeId],
    targets: &[T],
) -> Result<NodeId, MugradError> {
    if preds.len() != targets.len() {
        return Err(MugradError::InputArity {
            expected: preds.len(),
            actual: targets.len(),
            operation: "mse".to_string(),
        });
    }
    if preds.is_empty() {
        return Err(MugradError::EmptyInput {
            operation: "mse".to_string(),
        });
    }

    let squares: Vec<NodeId> = preds
        .iter()
        .zip(targets)
        .map(|(&p, &t)| {
            let diff = graph.sub_const(p, t, "diff");
            graph.pow(diff, T::from_f64(2.0), "sq")
        })
        .collect();
    let total = graph.sum(&squares, "sse");
    let n = T::from_f64(preds.len() as f64);
    Ok(graph.div_const(total, n, "loss"))
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
