use crate::graph::{Graph, NodeId};
use crate::ops::traits::MugradScalar;

/// A learnable scalar of a [`Module`](crate::nn::Module).
///
/// Keeps its value between graphs and remembers the leaf it is bound to in the
/// current graph, so its gradient can be read back after a backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<T: MugradScalar> {
    value: T,
    binding: Option<NodeId>,
}

impl<T: MugradScalar> Parameter<T> {
    pub fn new(value: T) -> Self {
        Parameter {
            value,
            binding: None,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Replaces the value used by the next binding. Nodes already built keep theirs.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// The leaf created by the most recent [`Parameter::bind`], if any.
    pub fn node(&self) -> Option<NodeId> {
        self.binding
    }

    /// Returns this parameter's leaf in `graph`, creating it on first use.
    ///
    /// Repeated forwards through the same graph (one per sample, say) share the
    /// leaf, so its gradient sums the contributions of every use.
    pub fn bind(&mut self, graph: &mut Graph<T>, label: impl Into<String>) -> NodeId {
        if let Some(id) = self.node_in(graph) {
            return id;
        }
        let id = graph.leaf(self.value, label);
        self.binding = Some(id);
        id
    }

    /// Gradient of the bound leaf in `graph`.
    ///
    /// `None` if the parameter was never bound to `graph`.
    pub fn grad(&self, graph: &Graph<T>) -> Option<T> {
        self.node_in(graph).map(|id| graph.grad(id))
    }

    fn node_in(&self, graph: &Graph<T>) -> Option<NodeId> {
        self.binding.filter(|id| id.graph() == graph.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_bind_and_grad() {
        let mut g = Graph::<f64>::new();
        let mut p = Parameter::new(2.0);
        assert!(p.node().is_none());
        assert!(p.grad(&g).is_none());

        let w = p.bind(&mut g, "w");
        assert_eq!(p.node(), Some(w));
        assert_eq!(g.value(w), 2.0);

        let y = g.mul_const(w, 5.0, "y");
        g.backward(y);
        assert_eq!(p.grad(&g), Some(5.0));
    }

    #[test]
    fn test_parameter_bind_is_reused_within_a_graph() {
        let mut g = Graph::<f64>::new();
        let mut p = Parameter::new(3.0);
        let first = p.bind(&mut g, "p");
        let second = p.bind(&mut g, "p");
        assert_eq!(first, second);
        assert_eq!(g.len(), 1);

        // p used in two places: y = p*2 + p*4
        let a = g.mul_const(first, 2.0, "a");
        let b = g.mul_const(second, 4.0, "b");
        let y = g.add(a, b, "y");
        g.backward(y);
        assert_eq!(p.grad(&g), Some(6.0));
    }

    #[test]
    fn test_parameter_rebinds_in_new_graph() {
        let mut g1 = Graph::<f64>::new();
        let mut p = Parameter::new(1.0);
        p.bind(&mut g1, "p");

        let mut g2 = Graph::<f64>::new();
        g2.leaf(0.0, "filler");
        assert!(p.grad(&g2).is_none());
        let id = p.bind(&mut g2, "p");
        assert_eq!(id.index(), 1);
        assert_eq!(p.grad(&g2), Some(0.0));
        assert!(p.grad(&g1).is_none());
    }

    #[test]
    fn test_set_value_does_not_touch_bound_node() {
        let mut g = Graph::<f64>::new();
        let mut p = Parameter::new(1.0);
        let id = p.bind(&mut g, "p");
        p.set_value(4.0);
        assert_eq!(p.value(), 4.0);
        assert_eq!(g.value(id), 1.0);
    }
}
