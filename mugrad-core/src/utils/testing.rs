use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;

/// Checks that each listed node's gradient is within `tolerance` of the expected value.
/// Panics with the offending node's label on the first mismatch.
pub fn check_grads_near<T: MugradScalar>(
    graph: &Graph<T>,
    expected: &[(NodeId, f64)],
    tolerance: f64,
) {
    for &(id, want) in expected {
        let got = graph.grad(id).as_f64();
        let diff = (got - want).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at {} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                id,
                graph.label(id),
                got,
                want,
                diff,
                tolerance
            );
        }
    }
}

/// Handles to the nodes of [`tanh_neuron`].
#[derive(Debug, Clone, Copy)]
pub struct NeuronNodes {
    pub x1: NodeId,
    pub x2: NodeId,
    pub w1: NodeId,
    pub w2: NodeId,
    pub b: NodeId,
    /// `x1*w1 + x2*w2 + b`, before the nonlinearity.
    pub n: NodeId,
    /// `(e^{2n} - 1) / (e^{2n} + 1)`, built from primitive operations.
    pub o: NodeId,
}

/// Builds the two-input neuron with an explicitly composed tanh:
/// `o = (exp(2n) - 1) / (exp(2n) + 1)` with `n = x1*w1 + x2*w2 + b`.
pub fn tanh_neuron<T: MugradScalar>(
    graph: &mut Graph<T>,
    x1: T,
    x2: T,
    w1: T,
    w2: T,
    b: T,
) -> NeuronNodes {
    let x1 = graph.leaf(x1, "x1");
    let x2 = graph.leaf(x2, "x2");
    let w1 = graph.leaf(w1, "w1");
    let w2 = graph.leaf(w2, "w2");
    let b = graph.leaf(b, "b");
    let x1w1 = graph.mul(x1, w1, "x1*w1");
    let x2w2 = graph.mul(x2, w2, "x2*w2");
    let x1w1x2w2 = graph.add(x1w1, x2w2, "x1*w1 + x2*w2");
    let n = graph.add(x1w1x2w2, b, "n");
    let two_n = graph.mul_const(n, T::from_f64(2.0), "2n");
    let e = graph.exp(two_n, "e^2n");
    let numerator = graph.sub_const(e, T::one(), "e^2n-1");
    let denominator = graph.add_const(e, T::one(), "e^2n+1");
    let o = graph.div(numerator, denominator, "o");
    NeuronNodes {
        x1,
        x2,
        w1,
        w2,
        b,
        n,
        o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grads_near_accepts_close_values() {
        let mut g = Graph::<f64>::new();
        let a = g.leaf(1.0, "a");
        let b = g.mul_const(a, 2.0, "b");
        g.backward(b);
        check_grads_near(&g, &[(a, 2.0 + 1e-9), (b, 1.0)], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch at #0 ('a')")]
    fn test_check_grads_near_panics_on_mismatch() {
        let mut g = Graph::<f64>::new();
        let a = g.leaf(1.0, "a");
        check_grads_near(&g, &[(a, 1.0)], 1e-6);
    }
}
