use super::GraphId;
use crate::ops::traits::MugradScalar;
use crate::ops::Op;
use std::fmt;

/// Stable handle to a node inside a [`Graph`](crate::Graph).
///
/// Identity is the arena slot, not the value: `x * x` records the same id twice.
/// Each id carries the [`GraphId`] of the graph that issued it, and lookups in any
/// other graph are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// The graph that issued this id.
    pub fn graph(self) -> GraphId {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A single scalar in the computation graph.
///
/// `value` is fixed when the node is built. `grad` starts at zero and is only
/// written by the backward pass (or an explicit reset).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T: MugradScalar> {
    pub(crate) label: String,
    pub(crate) value: T,
    pub(crate) grad: T,
    /// `None` for leaves: they have no operands and no backward rule.
    pub(crate) op: Option<Op<T>>,
}

impl<T: MugradScalar> Node<T> {
    pub(crate) fn new(label: impl Into<String>, value: T, op: Option<Op<T>>) -> Self {
        Node {
            label: label.into(),
            value,
            grad: T::zero(),
            op,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn op(&self) -> Option<&Op<T>> {
        self.op.as_ref()
    }

    /// Operand ids in call order. Empty for leaves.
    pub fn operands(&self) -> Vec<NodeId> {
        self.op.as_ref().map(Op::operands).unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }
}
