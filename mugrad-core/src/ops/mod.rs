//! Operations that build new nodes, and the differentiation rule for each.
//!
//! Every constructor is a method on [`Graph`] that reads its operands, appends a new
//! node tagged with an [`Op`], and returns its id. Inputs are never mutated.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

use crate::graph::{Graph, NodeId};
use std::fmt;
use traits::MugradScalar;

/// Tag recording which operation produced a node, and on which operands.
///
/// Operands are stored in call order; the order matters for `Sub` and for the
/// `Mul` that implements division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T: MugradScalar> {
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Power with a plain-number exponent; the exponent is not a node.
    Pow { base: NodeId, exponent: T },
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

impl<T: MugradScalar> Op<T> {
    /// Operand ids in call order.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow { base, .. } => vec![base],
            Op::Exp(x) | Op::Tanh(x) | Op::Relu(x) => vec![x],
        }
    }

    /// Pushes the gradient of the node this op produced into its operands.
    ///
    /// `out_value` and `out_grad` are the producing node's value and its fully
    /// accumulated gradient.
    pub(crate) fn backward(&self, graph: &mut Graph<T>, out_value: T, out_grad: T) {
        match *self {
            Op::Add(a, b) => {
                graph.accumulate_grad(a, out_grad);
                graph.accumulate_grad(b, out_grad);
            }
            Op::Sub(a, b) => {
                graph.accumulate_grad(a, out_grad);
                graph.accumulate_grad(b, -out_grad);
            }
            Op::Mul(a, b) => {
                let (a_val, b_val) = (graph.value(a), graph.value(b));
                graph.accumulate_grad(a, b_val * out_grad);
                graph.accumulate_grad(b, a_val * out_grad);
            }
            Op::Pow { base, exponent } => {
                let x = graph.value(base);
                let local = exponent * x.powf(exponent - T::one());
                graph.accumulate_grad(base, local * out_grad);
            }
            Op::Exp(x) => {
                graph.accumulate_grad(x, out_value * out_grad);
            }
            Op::Tanh(x) => {
                let t = graph.value(x).tanh();
                graph.accumulate_grad(x, (T::one() - t * t) * out_grad);
            }
            Op::Relu(x) => {
                if graph.value(x) > T::zero() {
                    graph.accumulate_grad(x, out_grad);
                }
            }
        }
    }
}

impl<T: MugradScalar> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add(..) => write!(f, "+"),
            Op::Sub(..) => write!(f, "-"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow { exponent, .. } => write!(f, "^ {}", exponent),
            Op::Exp(_) => write!(f, "exp"),
            Op::Tanh(_) => write!(f, "Tanh"),
            Op::Relu(_) => write!(f, "relu"),
        }
    }
}
