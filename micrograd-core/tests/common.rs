use micrograd_core::{Graph, MicrogradError, NodeId};
use rand::rngs::StdRng;
use rand::Rng;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One step of a randomly generated expression; indices point into the pool
/// of nodes built so far (inputs first).
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    /// a / (1 + exp(b)), denominator always > 1
    DivSoft(usize, usize),
    Tanh(usize),
    Sigmoid(usize),
    Square(usize),
    /// log(1 + exp(a))
    Softplus(usize),
    Exp(usize),
}

/// Draws a fixed program so the same expression can be rebuilt on fresh graphs.
#[allow(dead_code)]
pub fn random_program(rng: &mut StdRng, num_inputs: usize, num_steps: usize) -> Vec<Step> {
    let mut program = Vec::with_capacity(num_steps);
    for i in 0..num_steps {
        let pool = num_inputs + i;
        let a = rng.gen_range(0..pool);
        let b = rng.gen_range(0..pool);
        let step = match rng.gen_range(0..9) {
            0 => Step::Add(a, b),
            1 => Step::Sub(a, b),
            2 => Step::Mul(a, b),
            3 => Step::DivSoft(a, b),
            4 => Step::Tanh(a),
            5 => Step::Sigmoid(a),
            6 => Step::Square(a),
            7 => Step::Softplus(a),
            _ => Step::Exp(a),
        };
        program.push(step);
    }
    program
}

/// Builds the program on `graph`. Every intermediate is squashed through
/// `tanh` before reuse so values stay bounded however the steps chain.
#[allow(dead_code)]
pub fn build_program(graph: &mut Graph, inputs: &[NodeId], program: &[Step]) -> Result<NodeId, MicrogradError> {
    let mut pool: Vec<NodeId> = inputs.to_vec();
    for step in program {
        let raw = match *step {
            Step::Add(a, b) => graph.add(pool[a], pool[b])?,
            Step::Sub(a, b) => graph.sub(pool[a], pool[b])?,
            Step::Mul(a, b) => graph.mul(pool[a], pool[b])?,
            Step::DivSoft(a, b) => {
                let e = graph.exp(pool[b])?;
                let one = graph.constant(1.0);
                let den = graph.add(e, one)?;
                graph.div(pool[a], den)?
            }
            Step::Tanh(a) => graph.tanh(pool[a])?,
            Step::Sigmoid(a) => graph.sigmoid(pool[a])?,
            Step::Square(a) => graph.pow(pool[a], 2.0)?,
            Step::Softplus(a) => {
                let e = graph.exp(pool[a])?;
                let one = graph.constant(1.0);
                let s = graph.add(e, one)?;
                graph.log(s)?
            }
            Step::Exp(a) => graph.exp(pool[a])?,
        };
        pool.push(graph.tanh(raw)?);
    }
    // Root mixes the last few nodes so shared sub-expressions feed it more than once.
    let tail_start = pool.len().saturating_sub(3);
    let tail = pool[tail_start..].to_vec();
    graph.sum(&tail)
}
