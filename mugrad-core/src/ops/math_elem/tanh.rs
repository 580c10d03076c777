// mugrad-core/src/ops/math_elem/tanh.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// Hyperbolic tangent, evaluated as `(e^{2x} - 1) / (e^{2x} + 1)`.
    ///
    /// Backward: `x` receives `1 - tanh(x)^2` times the output gradient. For
    /// `x` large enough that `e^{2x}` overflows the value is NaN.
    pub fn tanh(&mut self, x: NodeId, label: impl Into<String>) -> NodeId {
        let two_x = self.value(x) * T::from_f64(2.0);
        let e = two_x.exp();
        let value = (e - T::one()) / (e + T::one());
        self.push(Node::new(label, value, Some(Op::Tanh(x))))
    }
}
