use super::*;
use crate::config::GraphConfig;
use approx::assert_relative_eq;

fn position(order: &[NodeId], id: NodeId) -> usize {
    order
        .iter()
        .position(|&x| x == id)
        .expect("node missing from order")
}

#[test]
fn test_topological_order_operands_first_no_duplicates() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0, "a");
    let b = g.leaf(2.0, "b");
    let c = g.mul(a, b, "c");
    let d = g.add(c, a, "d");
    let e = g.mul(d, c, "e");
    let unrelated = g.leaf(9.0, "unrelated");

    let order = g.topological_order(e);
    assert_eq!(order.len(), 5);
    assert!(!order.contains(&unrelated));
    assert_eq!(*order.last().unwrap(), e);

    for &id in &order {
        assert_eq!(order.iter().filter(|&&x| x == id).count(), 1);
        for operand in g.operands(id) {
            assert!(position(&order, operand) < position(&order, id));
        }
    }
}

#[test]
fn test_topological_order_of_leaf_is_itself() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0, "a");
    assert_eq!(g.topological_order(a), vec![a]);
}

#[test]
fn test_backward_on_leaf_seeds_only_the_root() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0, "a");
    g.backward(a);
    assert_eq!(g.grad(a), 1.0);
}

#[test]
fn test_shared_operand_receives_sum_of_paths() {
    // r = y*2 + y^2, dr/dy = 2 + 2y = 8 at y = 3
    let mut g = Graph::<f64>::new();
    let y = g.leaf(3.0, "y");
    let p = g.mul_const(y, 2.0, "p");
    let q = g.pow(y, 2.0, "q");
    let r = g.add(p, q, "r");
    g.backward(r);
    assert_relative_eq!(g.grad(y), 8.0);
    assert_relative_eq!(g.grad(p), 1.0);
    assert_relative_eq!(g.grad(q), 1.0);
}

#[test]
fn test_intermediate_reused_downstream() {
    // c = a*b used twice: e = c*c + c, de/dc = 2c + 1
    let mut g = Graph::<f64>::new();
    let a = g.leaf(2.0, "a");
    let b = g.leaf(-1.0, "b");
    let c = g.mul(a, b, "c");
    let cc = g.mul(c, c, "cc");
    let e = g.add(cc, c, "e");
    g.backward(e);
    let dc = 2.0 * -2.0 + 1.0;
    assert_relative_eq!(g.grad(c), dc);
    assert_relative_eq!(g.grad(a), dc * -1.0);
    assert_relative_eq!(g.grad(b), dc * 2.0);
}

#[test]
fn test_accumulate_mode_doubles_on_second_pass() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(2.0, "a");
    let b = g.leaf(3.0, "b");
    let c = g.mul(a, b, "c");
    g.backward(c);
    g.backward(c);
    assert_eq!(g.grad(c), 1.0);
    assert_eq!(g.grad(a), 6.0);
    assert_eq!(g.grad(b), 4.0);
}

#[test]
fn test_accumulate_mode_doubles_leaves_through_deep_graph() {
    // o = tanh((x*w + b)^2), three levels between the leaves and the root
    let mut g = Graph::<f64>::new();
    let x = g.leaf(0.5, "x");
    let w = g.leaf(-1.5, "w");
    let b = g.leaf(0.25, "b");
    let xw = g.mul(x, w, "xw");
    let n = g.add(xw, b, "n");
    let sq = g.pow(n, 2.0, "sq");
    let o = g.tanh(sq, "o");

    g.backward(o);
    let first: Vec<f64> = g.nodes().map(|(_, node)| node.grad()).collect();
    g.backward(o);

    for (id, node) in g.nodes() {
        let expected = if node.is_leaf() {
            2.0 * first[id.index()]
        } else {
            first[id.index()]
        };
        assert_relative_eq!(node.grad(), expected, epsilon = 1e-12);
    }
    assert_eq!(g.grad(o), 1.0);
    assert_ne!(g.grad(w), 0.0);
}

#[test]
fn test_manual_reset_reproduces_first_pass() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(0.5, "x");
    let w = g.leaf(-1.25, "w");
    let xw = g.mul(x, w, "xw");
    let t = g.tanh(xw, "t");
    let o = g.pow(t, 3.0, "o");

    g.backward(o);
    let first: Vec<f64> = g.nodes().map(|(_, n)| n.grad()).collect();

    g.zero_grad();
    g.backward(o);
    let second: Vec<f64> = g.nodes().map(|(_, n)| n.grad()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_reset_reachable_mode_is_repeatable() {
    let mut g = Graph::<f64>::with_config(
        GraphConfig::default().with_grad_mode(GradMode::ResetReachable),
    );
    let a = g.leaf(2.0, "a");
    let b = g.leaf(3.0, "b");
    let c = g.mul(a, b, "c");
    g.backward(c);
    g.backward(c);
    assert_eq!(g.grad(a), 3.0);
    assert_eq!(g.grad(b), 2.0);
}

#[test]
fn test_backward_from_intermediate_leaves_downstream_alone() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(2.0, "a");
    let b = g.mul_const(a, 3.0, "b");
    let c = g.add_const(b, 1.0, "c");
    g.backward(b);
    assert_eq!(g.grad(a), 3.0);
    assert_eq!(g.grad(c), 0.0);
}

#[test]
fn test_deep_chain_does_not_overflow_the_stack() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(1.0, "x");
    let mut acc = x;
    for _ in 0..100_000 {
        acc = g.add_const(acc, 0.0, "");
    }
    g.backward(acc);
    assert_eq!(g.grad(x), 1.0);
}
