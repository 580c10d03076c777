// mugrad-core/src/ops/activation/relu.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `max(0, x)`. Backward: the output gradient passes through when `x > 0`.
    pub fn relu(&mut self, x: NodeId, label: impl Into<String>) -> NodeId {
        let value = self.value(x).max(T::zero());
        self.push(Node::new(label, value, Some(Op::Relu(x))))
    }
}
