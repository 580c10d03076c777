//! The arena that owns every node of a computation graph.
//!
//! Nodes are appended by the constructors in [`crate::ops`] and are never removed;
//! the whole graph is released together when the [`Graph`] is dropped. A node
//! consumed by several others is simply referenced by the same [`NodeId`] from each
//! of them, so gradient accumulation is a write to one arena slot.

mod display;
mod node;

pub use display::NodeDisplay;
pub use node::{Node, NodeId};

use crate::config::GraphConfig;
use crate::error::MugradError;
use crate::ops::traits::MugradScalar;
use crate::ops::Op;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Graph`], used to tell whether a [`NodeId`] was issued by it.
///
/// Clones share the identity of the graph they were cloned from, so ids issued
/// before the clone resolve in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

/// Owner of a scalar computation graph.
///
/// `T` defaults to `f64`; `f32` graphs are also supported.
#[derive(Debug, Clone)]
pub struct Graph<T: MugradScalar = f64> {
    id: GraphId,
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) config: GraphConfig,
}

impl<T: MugradScalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MugradScalar> Graph<T> {
    /// Creates an empty graph with the default [`GraphConfig`].
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            id: GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)),
            nodes: Vec::new(),
            config,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf (input or constant). Leaves have no operands and no backward rule.
    pub fn leaf(&mut self, value: T, label: impl Into<String>) -> NodeId {
        self.push(Node::new(label, value, None))
    }

    pub(crate) fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(node);
        id
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this graph. Mixing ids across graphs is a
    /// programming error; use [`Graph::try_node`] for untrusted ids.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        match self.try_node(id) {
            Ok(node) => node,
            Err(err) => panic!("node {} does not belong to this graph: {}", id, err),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        if let Err(err) = self.check_id(id) {
            panic!("node {} does not belong to this graph: {}", id, err);
        }
        &mut self.nodes[id.index]
    }

    /// Checked variant of [`Graph::node`].
    pub fn try_node(&self, id: NodeId) -> Result<&Node<T>, MugradError> {
        self.check_id(id)?;
        Ok(&self.nodes[id.index])
    }

    fn check_id(&self, id: NodeId) -> Result<(), MugradError> {
        if id.graph != self.id {
            return Err(MugradError::ForeignNode { id: id.index });
        }
        if id.index >= self.nodes.len() {
            return Err(MugradError::UnknownNode {
                id: id.index,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }

    pub fn value(&self, id: NodeId) -> T {
        self.node(id).value
    }

    pub fn grad(&self, id: NodeId) -> T {
        self.node(id).grad
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.node(id).label
    }

    pub fn op(&self, id: NodeId) -> Option<&Op<T>> {
        self.node(id).op.as_ref()
    }

    /// Operand ids of `id` in call order.
    pub fn operands(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).operands()
    }

    /// Iterates over every node in construction order. Read-only access for
    /// consumers such as graph renderers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        let graph = self.id;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(index, node)| (NodeId { graph, index }, node))
    }

    /// Overwrites the gradient of one node.
    pub fn set_grad(&mut self, id: NodeId, grad: T) {
        self.node_mut(id).grad = grad;
    }

    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: T) {
        self.node_mut(id).grad += delta;
    }

    /// Resets every gradient in the graph to zero.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Resets the gradients of `root` and everything it depends on.
    pub fn zero_grad_from(&mut self, root: NodeId) {
        for id in self.topological_order(root) {
            self.node_mut(id).grad = T::zero();
        }
    }

    /// Returns a `Display` adapter rendering `id` and its operands.
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_, T> {
        NodeDisplay { graph: self, id }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
