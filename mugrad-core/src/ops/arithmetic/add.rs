// mugrad-core/src/ops/arithmetic/add.rs

use crate::graph::{Graph, Node, NodeId};
use crate::ops::traits::MugradScalar;
use crate::ops::Op;

impl<T: MugradScalar> Graph<T> {
    /// `a + b`. Backward: both operands receive the output gradient unchanged.
    pub fn add(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self.value(a) + self.value(b);
        self.push(Node::new(label, value, Some(Op::Add(a, b))))
    }

    /// `a + k`: wraps `k` in a leaf labelled `const`, then delegates to [`Graph::add`].
    pub fn add_const(&mut self, a: NodeId, k: T, label: impl Into<String>) -> NodeId {
        let k = self.leaf(k, "const");
        self.add(a, k, label)
    }

    /// Left fold of [`Graph::add`] over `terms`.
    ///
    /// The last addition carries `label`; intermediate sums are unlabelled.
    /// A single term is returned as is, and an empty slice yields a zero leaf.
    pub fn sum(&mut self, terms: &[NodeId], label: impl Into<String>) -> NodeId {
        let label = label.into();
        match terms {
            [] => self.leaf(T::zero(), label),
            [only] => *only,
            [first, rest @ ..] => {
                let mut acc = *first;
                for (i, &term) in rest.iter().enumerate() {
                    let step_label = if i + 1 == rest.len() {
                        label.clone()
                    } else {
                        String::new()
                    };
                    acc = self.add(acc, term, step_label);
                }
                acc
            }
        }
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
