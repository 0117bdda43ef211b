// Hidden -> Revealing -> Revealed, where Revealed is terminal.
// The notification is an FnOnce held in an Option, so it can only be taken once.

use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,    // nothing erased yet
    Revealing, // some coverage, still at or under the threshold
    Revealed,  // threshold crossed; terminal
}

pub type RevealCallback = Box<dyn FnOnce()>;

pub struct RevealMachine {
    state: RevealState,
    threshold: f64,
    on_revealed: Option<RevealCallback>,
}

impl RevealMachine {
    pub fn new(threshold: f64, on_revealed: RevealCallback) -> Self {
        Self { state: RevealState::Hidden, threshold, on_revealed: Some(on_revealed) }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed a fresh coverage reading. Returns true only for the single call
    /// that moves the machine into `Revealed`.
    pub fn observe(&mut self, coverage: f64) -> bool {
        match self.state {
            RevealState::Revealed => false,
            _ if coverage > self.threshold => {
                self.state = RevealState::Revealed;
                info!("revealed at {coverage:.2}% (threshold {:.0}%)", self.threshold);
                if let Some(notify) = self.on_revealed.take() {
                    notify();
                }
                true
            }
            _ => {
                if coverage > 0.0 {
                    self.state = RevealState::Revealing;
                }
                false
            }
        }
    }
}
