// mugrad-core/src/ops/math_elem/exp.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `e^x`. Backward: `x` receives this node's own value times the output gradient.
    pub fn exp(&mut self, x: NodeId, label: impl Into<String>) -> NodeId {
        let value = self.value(x).exp();
        self.push(Node::new(label, value, Some(Op::Exp(x))))
    }
}
