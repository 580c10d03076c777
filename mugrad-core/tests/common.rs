// Shared by several test crates; not every crate uses every helper.
#![allow(dead_code)]

use mugrad_core::utils::testing::{tanh_neuron, NeuronNodes};
use mugrad_core::Graph;

pub const X1: f64 = 2.0;
pub const X2: f64 = 0.0;
pub const W1: f64 = -3.0;
pub const W2: f64 = 1.0;
pub const B: f64 = 6.8813735870195432;

pub(crate) fn canonical_neuron() -> (Graph<f64>, NeuronNodes) {
    let mut graph = Graph::new();
    let nodes = tanh_neuron(&mut graph, X1, X2, W1, W2, B);
    (graph, nodes)
}

/// Four-sample regression set: three features, one target in `[-1, 1]`.
pub(crate) fn tiny_dataset() -> (Vec<[f64; 3]>, Vec<f64>) {
    let xs = vec![
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
