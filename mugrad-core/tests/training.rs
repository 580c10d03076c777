mod common;

use common::tiny_dataset;
use mugrad_core::nn::losses::mse;
use mugrad_core::nn::{Mlp, Module};
use mugrad_core::optim::Sgd;
use mugrad_core::{Graph, MugradError};

fn loss_of(mlp: &mut Mlp<f64>, xs: &[[f64; 3]], ys: &[f64]) -> Result<(Graph<f64>, f64), MugradError> {
    let mut graph = Graph::new();
    let mut preds = Vec::with_capacity(xs.len());
    for row in xs {
        let inputs: Vec<_> = row
            .iter()
            .enumerate()
            .map(|(i, &v)| graph.leaf(v, format!("x{}", i)))
            .collect();
        preds.extend(mlp.forward(&mut graph, &inputs)?);
    }
    let loss = mse(&mut graph, &preds, ys)?;
    graph.backward(loss);
    let value = graph.value(loss);
    Ok((graph, value))
}

#[test]
fn sgd_reduces_mse_on_tiny_dataset() -> Result<(), MugradError> {
    let (xs, ys) = tiny_dataset();
    let mut mlp: Mlp<f64> = Mlp::seeded(3, &[4, 4, 1], 42)?;
    let sgd = Sgd::new(0.05)?;

    let (_, initial) = loss_of(&mut mlp, &xs, &ys)?;
    let mut last = initial;
    for _ in 0..50 {
        let (graph, loss) = loss_of(&mut mlp, &xs, &ys)?;
        let updated = sgd.step(&graph, &mut mlp);
        assert_eq!(updated, mlp.num_parameters());
        last = loss;
    }
    let (_, final_loss) = loss_of(&mut mlp, &xs, &ys)?;
    assert!(last.is_finite());
    assert!(
        final_loss < initial,
        "loss did not decrease: {} -> {}",
        initial,
        final_loss
    );
    Ok(())
}

#[test]
fn each_step_builds_a_fresh_graph() -> Result<(), MugradError> {
    let (xs, ys) = tiny_dataset();
    let mut mlp: Mlp<f64> = Mlp::seeded(3, &[2, 1], 7)?;
    let (first_graph, _) = loss_of(&mut mlp, &xs, &ys)?;
    let before: Vec<f64> = mlp.parameters().iter().map(|p| p.value()).collect();

    Sgd::new(0.1)?.step(&first_graph, &mut mlp);
    let after: Vec<f64> = mlp.parameters().iter().map(|p| p.value()).collect();
    assert_ne!(before, after);

    // the old graph still holds the values it was built with
    for (p, old) in mlp.parameters().iter().zip(&before) {
        let id = p.node().unwrap();
        assert_eq!(first_graph.value(id), *old);
    }
    Ok(())
}
