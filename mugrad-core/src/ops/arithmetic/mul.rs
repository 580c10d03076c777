// mugrad-core/src/ops/arithmetic/mul.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `a * b`. Backward: each operand receives the other's value times the output gradient.
    pub fn mul(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self.value(a) * self.value(b);
        self.push(Node::new(label, value, Some(Op::Mul(a, b))))
    }

    /// `a * k`: wraps `k` in a leaf labelled `const`, then delegates to [`Graph::mul`].
    pub fn mul_const(&mut self, a: NodeId, k: T, label: impl Into<String>) -> NodeId {
        let k = self.leaf(k, "const");
        self.mul(a, k, label)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
