// Human-readable rendering of a node and, recursively, its operands.

use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;
use std::fmt;

/// `Display` adapter returned by [`Graph::display`].
///
/// Renders `Value(<label> - Data=<value>, Grad=<grad>, Children=[...], Op=<tag>)`,
/// omitting `Children` and `Op` for leaves.
pub struct NodeDisplay<'g, T: MugradScalar> {
    pub(crate) graph: &'g Graph<T>,
    pub(crate) id: NodeId,
}

impl<T: MugradScalar> fmt::Display for NodeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        write!(
            f,
            "Value({} - Data={}, Grad={}",
            node.label, node.value, node.grad
        )?;
        if let Some(op) = node.op.as_ref() {
            write!(f, ", Children=[")?;
            for (i, child) in op.operands().into_iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.graph.display(child))?;
            }
            write!(f, "], Op={}", op)?;
        }
        write!(f, ")")
    }
}

impl<T: MugradScalar> fmt::Debug for NodeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
