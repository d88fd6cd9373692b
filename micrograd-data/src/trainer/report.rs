/// Mean per-sample loss recorded after every epoch of [`Trainer::fit`](super::Trainer::fit).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingReport {
    pub epoch_losses: Vec<f64>,
}

impl TrainingReport {
    pub fn epochs(&self) -> usize {
        self.epoch_losses.len()
    }

    pub fn initial_loss(&self) -> Option<f64> {
        self.epoch_losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }
}
