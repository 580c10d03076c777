//! # Single neuron with a hand-built tanh
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` from primitive operations
//! (`2n -> exp -> (e-1)/(e+1)`), runs the backward pass and prints every node.
//!
//! Run with:
//! `cargo run --example tanh_neuron`

use mugrad_core::utils::testing::tanh_neuron;
use mugrad_core::Graph;

fn main() {
    let mut graph = Graph::<f64>::new();
    let nodes = tanh_neuron(&mut graph, 2.0, 0.0, -3.0, 1.0, 6.8813735870195432);
    graph.backward(nodes.o);

    println!("{}", graph.display(nodes.o));
    println!();
    for (name, id) in [
        ("x1", nodes.x1),
        ("x2", nodes.x2),
        ("w1", nodes.w1),
        ("w2", nodes.w2),
        ("b", nodes.b),
    ] {
        println!("d o / d {:<2} = {:+.6}", name, graph.grad(id));
    }
}
