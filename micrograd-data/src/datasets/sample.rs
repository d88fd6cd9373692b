/// One training example: raw network inputs and the expected outputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Sample { input, target }
    }
}
