use crate::config::GradMode;
use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;
use log::{debug, trace};

impl<T: MugradScalar> Graph<T> {
    /// Depth-first post-order of every node reachable from `root`.
    ///
    /// Operands always appear before the nodes that consume them, and each node
    /// appears once even when it is reachable along several paths. The visited
    /// table lives only for this call.
    pub fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        // (node, operands already scheduled)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            let node = self.node(id);
            if visited[id.index] {
                continue;
            }
            visited[id.index] = true;
            stack.push((id, true));
            // Reversed so the first operand is explored first.
            for operand in node.operands().into_iter().rev() {
                if !visited[operand.index] {
                    stack.push((operand, false));
                }
            }
        }
        order
    }

    /// Runs the backward pass rooted at `root`.
    ///
    /// The root's gradient is overwritten with 1, then every reachable node pushes its
    /// accumulated gradient into its operands in reverse topological order. Leaves are
    /// skipped. Under [`GradMode::Accumulate`] the reachable interior nodes are cleared
    /// first and leaves are not, so each pass adds exactly one set of contributions to
    /// the leaves; see [`Graph::zero_grad_from`] for a full reset.
    pub fn backward(&mut self, root: NodeId) {
        let order = self.topological_order(root);
        debug!(
            "backward: root {} ('{}'), {} reachable nodes, mode {:?}",
            root,
            self.label(root),
            order.len(),
            self.config.grad_mode
        );

        for &id in &order {
            let clear = match self.config.grad_mode {
                GradMode::Accumulate => !self.node(id).is_leaf(),
                GradMode::ResetReachable => true,
            };
            if clear {
                self.set_grad(id, T::zero());
            }
        }
        self.set_grad(root, T::one());

        for &id in order.iter().rev() {
            let node = self.node(id);
            let Some(op) = node.op else {
                continue;
            };
            let (value, grad) = (node.value, node.grad);
            trace!("backward: {} {} ('{}') grad={}", op, id, node.label, grad);
            op.backward(self, value, grad);
        }
        debug!("backward: finished at root {}", root);
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
