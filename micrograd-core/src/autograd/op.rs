use super::node::NodeId;
use std::fmt;

/// The operation that produced a node, with the operand ids and whatever data
/// its local derivative rule needs.
///
/// `neg`, `sub` and `div` have no variant of their own: the graph builds them
/// from `Mul`, `Add` and `Pow`, so they inherit those rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or constant. Has no operands and propagates nothing.
    Leaf,
    Add([NodeId; 2]),
    Mul([NodeId; 2]),
    /// Base node raised to a constant real exponent.
    Pow(NodeId, f64),
    Exp(NodeId),
    Log(NodeId),
    Tanh(NodeId),
    Sigmoid(NodeId),
    Relu(NodeId),
}

/// Partial derivatives of a node with respect to each of its operands.
///
/// At most two entries are present. A node using the same operand twice
/// (`x * x`) yields two entries for that id, one per edge.
pub type LocalGradients = [Option<(NodeId, f64)>; 2];

impl Op {
    /// Direct inputs of the node, in operand order.
    pub fn operands(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(ids) | Op::Mul(ids) => ids,
            Op::Pow(id, _)
            | Op::Exp(id)
            | Op::Log(id)
            | Op::Tanh(id)
            | Op::Sigmoid(id)
            | Op::Relu(id) => std::slice::from_ref(id),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Local derivative rule.
    ///
    /// `output` is the forward value of the node carrying this op and
    /// `value_of` reads operand values. The caller multiplies each returned
    /// derivative by the node's accumulated gradient and adds the product into
    /// the operand's gradient.
    pub fn local_gradients<F>(&self, output: f64, value_of: F) -> LocalGradients
    where
        F: Fn(NodeId) -> f64,
    {
        match *self {
            Op::Leaf => [None, None],
            Op::Add([a, b]) => [Some((a, 1.0)), Some((b, 1.0))],
            Op::Mul([a, b]) => [Some((a, value_of(b))), Some((b, value_of(a)))],
            Op::Pow(a, k) => [Some((a, k * value_of(a).powf(k - 1.0))), None],
            Op::Exp(a) => [Some((a, output)), None],
            Op::Log(a) => [Some((a, 1.0 / value_of(a))), None],
            Op::Tanh(a) => [Some((a, 1.0 - output * output)), None],
            Op::Sigmoid(a) => [Some((a, output * (1.0 - output))), None],
            Op::Relu(a) => {
                let slope = if output > 0.0 { 1.0 } else { 0.0 };
                [Some((a, slope)), None]
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(_) => f.write_str("+"),
            Op::Mul(_) => f.write_str("*"),
            Op::Pow(_, k) => write!(f, "**{k}"),
            Op::Exp(_) => f.write_str("exp"),
            Op::Log(_) => f.write_str("log"),
            Op::Tanh(_) => f.write_str("tanh"),
            Op::Sigmoid(_) => f.write_str("sigmoid"),
            Op::Relu(_) => f.write_str("relu"),
        }
    }
}

#[cfg(test)]
#[path = "op_test.rs"]
mod tests;
