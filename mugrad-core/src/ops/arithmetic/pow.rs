// mugrad-core/src/ops/arithmetic/pow.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `x^k` for a plain-number exponent `k`.
    ///
    /// Backward: `x` receives `k * x^(k-1)` times the output gradient. Negative bases
    /// with fractional exponents give NaN, following `powf`.
    pub fn pow(&mut self, x: NodeId, exponent: T, label: impl Into<String>) -> NodeId {
        let value = self.value(x).powf(exponent);
        self.push(Node::new(
            label,
            value,
            Some(Op::Pow {
                base: x,
                exponent,
            }),
        ))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
