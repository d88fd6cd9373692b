use super::*;
use approx::assert_relative_eq;

fn id(i: usize) -> NodeId {
    NodeId::new(i, 0)
}

// Operand values keyed by index, for rules that read their inputs.
fn values(vals: &[f64]) -> impl Fn(NodeId) -> f64 + '_ {
    move |n: NodeId| vals[n.index()]
}

#[test]
fn test_leaf_has_no_operands_and_no_rule() {
    assert!(Op::Leaf.operands().is_empty());
    assert!(Op::Leaf.is_leaf());
    assert_eq!(Op::Leaf.local_gradients(3.0, values(&[])), [None, None]);
}

#[test]
fn test_operands_in_order() {
    assert_eq!(Op::Add([id(0), id(1)]).operands(), &[id(0), id(1)]);
    assert_eq!(Op::Mul([id(2), id(2)]).operands(), &[id(2), id(2)]);
    assert_eq!(Op::Pow(id(4), 2.0).operands(), &[id(4)]);
    assert_eq!(Op::Relu(id(1)).operands(), &[id(1)]);
}

#[test]
fn test_add_rule_passes_gradient_through() {
    let g = Op::Add([id(0), id(1)]).local_gradients(5.0, values(&[2.0, 3.0]));
    assert_eq!(g, [Some((id(0), 1.0)), Some((id(1), 1.0))]);
}

#[test]
fn test_mul_rule_swaps_operand_values() {
    let g = Op::Mul([id(0), id(1)]).local_gradients(6.0, values(&[2.0, 3.0]));
    assert_eq!(g, [Some((id(0), 3.0)), Some((id(1), 2.0))]);
}

#[test]
fn test_mul_of_same_operand_yields_two_edges() {
    let g = Op::Mul([id(0), id(0)]).local_gradients(9.0, values(&[3.0]));
    assert_eq!(g, [Some((id(0), 3.0)), Some((id(0), 3.0))]);
}

#[test]
fn test_pow_rule() {
    let g = Op::Pow(id(0), 3.0).local_gradients(8.0, values(&[2.0]));
    let (node, d) = g[0].expect("pow has one operand");
    assert_eq!(node, id(0));
    assert_relative_eq!(d, 12.0, epsilon = 1e-12);
    assert_eq!(g[1], None);
}

#[test]
fn test_exp_rule_uses_forward_value() {
    let out = 1.0f64.exp();
    let g = Op::Exp(id(0)).local_gradients(out, values(&[1.0]));
    assert_eq!(g[0], Some((id(0), out)));
}

#[test]
fn test_log_rule() {
    let g = Op::Log(id(0)).local_gradients(4.0f64.ln(), values(&[4.0]));
    assert_eq!(g[0], Some((id(0), 0.25)));
}

#[test]
fn test_tanh_and_sigmoid_rules_at_zero() {
    let t = Op::Tanh(id(0)).local_gradients(0.0, values(&[0.0]));
    assert_eq!(t[0], Some((id(0), 1.0)));
    let s = Op::Sigmoid(id(0)).local_gradients(0.5, values(&[0.0]));
    assert_eq!(s[0], Some((id(0), 0.25)));
}

#[test]
fn test_relu_rule_gates_on_output() {
    let on = Op::Relu(id(0)).local_gradients(1.5, values(&[1.5]));
    assert_eq!(on[0], Some((id(0), 1.0)));
    let off = Op::Relu(id(0)).local_gradients(0.0, values(&[-2.0]));
    assert_eq!(off[0], Some((id(0), 0.0)));
}

#[test]
fn test_display_tags() {
    assert_eq!(Op::Leaf.to_string(), "");
    assert_eq!(Op::Add([id(0), id(1)]).to_string(), "+");
    assert_eq!(Op::Mul([id(0), id(1)]).to_string(), "*");
    assert_eq!(Op::Pow(id(0), -1.0).to_string(), "**-1");
    assert_eq!(Op::Tanh(id(0)).to_string(), "tanh");
    assert_eq!(Op::Sigmoid(id(0)).to_string(), "sigmoid");
    assert_eq!(Op::Relu(id(0)).to_string(), "relu");
}
