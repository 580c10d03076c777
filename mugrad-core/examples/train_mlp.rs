//! # Training a small MLP with SGD
//!
//! A 3-4-4-1 perceptron is fitted to four samples. Every step builds a fresh
//! graph, runs the backward pass from the MSE loss, then lets `Sgd` move the
//! parameters held by the model.
//!
//! Run with:
//! `cargo run --example train_mlp`

use mugrad_core::nn::losses::mse;
use mugrad_core::nn::{Mlp, Module};
use mugrad_core::optim::Sgd;
use mugrad_core::{Graph, MugradError};

fn main() -> Result<(), MugradError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut model: Mlp<f64> = Mlp::seeded(3, &[4, 4, 1], 1337)?;
    let sgd = Sgd::new(0.05)?;
    println!("model has {} parameters", model.num_parameters());

    for step in 0..100 {
        let mut graph = Graph::new();
        let mut preds = Vec::with_capacity(xs.len());
        for row in &xs {
            let inputs: Vec<_> = row.iter().map(|&v| graph.leaf(v, "x")).collect();
            preds.extend(model.forward(&mut graph, &inputs)?);
        }
        let loss = mse(&mut graph, &preds, &ys)?;
        graph.backward(loss);
        sgd.step(&graph, &mut model);

        if step % 10 == 0 {
            let outputs: Vec<String> = preds
                .iter()
                .map(|&p| format!("{:+.3}", graph.value(p)))
                .collect();
            println!(
                "step {:>3}  loss {:.6}  preds [{}]",
                step,
                graph.value(loss),
                outputs.join(", ")
            );
        }
    }
    Ok(())
}
