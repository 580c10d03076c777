// mugrad-core/src/ops/arithmetic/div.rs

use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;

impl<T: MugradScalar> Graph<T> {
    /// `a / b`, built as `a * b^-1`.
    ///
    /// The reciprocal is an unlabelled intermediate node; gradients follow from the
    /// `Pow` and `Mul` rules. `b == 0` yields an infinite or NaN value, not an error.
    pub fn div(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let reciprocal = self.pow(b, -T::one(), "");
        self.mul(a, reciprocal, label)
    }

    /// `a / k`: wraps `k` in a leaf labelled `const`, then delegates to [`Graph::div`].
    pub fn div_const(&mut self, a: NodeId, k: T, label: impl Into<String>) -> NodeId {
        let k = self.leaf(k, "const");
        self.div(a, k, label)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
