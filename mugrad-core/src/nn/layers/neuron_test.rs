use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_forward_matches_closed_form() -> Result<(), MugradError> {
    let mut neuron = Neuron::from_values(vec![-3.0, 1.0], 6.8813735870195432, Activation::Tanh);
    let mut g = Graph::<f64>::new();
    let x1 = g.leaf(2.0, "x1");
    let x2 = g.leaf(0.0, "x2");

    let out = neuron.forward(&mut g, &[x1, x2])?[0];
    let n: f64 = 2.0 * -3.0 + 0.0 * 1.0 + 6.8813735870195432;
    assert_relative_eq!(g.value(out), n.tanh(), epsilon = 1e-12);

    g.backward(out);
    let local = 1.0 - n.tanh().powi(2);
    let grads: Vec<f64> = neuron
        .parameters()
        .iter()
        .map(|p| p.grad(&g).unwrap())
        .collect();
    assert_relative_eq!(grads[0], 2.0 * local, epsilon = 1e-12);
    assert_relative_eq!(grads[1], 0.0 * local, epsilon = 1e-12);
    assert_relative_eq!(grads[2], local, epsilon = 1e-12);
    assert_relative_eq!(g.grad(x1), -3.0 * local, epsilon = 1e-12);
    assert_relative_eq!(g.grad(x2), 1.0 * local, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_linear_and_relu() -> Result<(), MugradError> {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(2.0, "x");

    let mut linear = Neuron::from_values(vec![-1.0], 0.5, Activation::Linear);
    let y = linear.forward(&mut g, &[x])?[0];
    assert_eq!(g.value(y), -1.5);

    let mut relu = Neuron::from_values(vec![-1.0], 0.5, Activation::Relu);
    let z = relu.forward(&mut g, &[x])?[0];
    assert_eq!(g.value(z), 0.0);
    Ok(())
}

#[test]
fn test_neuron_rejects_wrong_width() {
    let mut neuron = Neuron::from_values(vec![1.0, 2.0], 0.0, Activation::Tanh);
    let mut g = Graph::<f64>::new();
    let x = g.leaf(1.0, "x");
    let err = neuron.forward(&mut g, &[x]).unwrap_err();
    assert_eq!(
        err,
        MugradError::InputArity {
            expected: 2,
            actual: 1,
            operation: "Neuron::forward".to_string()
        }
    );
}

#[test]
fn test_neuron_random_init_is_seeded() -> Result<(), MugradError> {
    let a: Neuron<f64> = Neuron::new(3, Activation::Tanh, &Init::default(), &mut StdRng::seed_from_u64(1))?;
    let b: Neuron<f64> = Neuron::new(3, Activation::Tanh, &Init::default(), &mut StdRng::seed_from_u64(1))?;
    assert_eq!(a.nin(), 3);
    assert_eq!(a.num_parameters(), 4);
    let va: Vec<f64> = a.parameters().iter().map(|p| p.value()).collect();
    let vb: Vec<f64> = b.parameters().iter().map(|p| p.value()).collect();
    assert_eq!(va, vb);
    assert!(va.iter().all(|v| (-1.0..1.0).contains(v)));
    Ok(())
}
