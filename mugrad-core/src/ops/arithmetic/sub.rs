// mugrad-core/src/ops/arithmetic/sub.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `a - b`. Backward: `a` receives the output gradient, `b` its negation.
    pub fn sub(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self.value(a) - self.value(b);
        self.push(Node::new(label, value, Some(Op::Sub(a, b))))
    }

    /// `a - k`: wraps `k` in a leaf labelled `const`, then delegates to [`Graph::sub`].
    pub fn sub_const(&mut self, a: NodeId, k: T, label: impl Into<String>) -> NodeId {
        let k = self.leaf(k, "const");
        self.sub(a, k, label)
    }

    /// `-a`, built as `a * -1`.
    pub fn neg(&mut self, a: NodeId, label: impl Into<String>) -> NodeId {
        self.mul_const(a, -T::one(), label)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
