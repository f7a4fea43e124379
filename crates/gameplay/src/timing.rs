use rps_core::*;
use std::time::Duration;

/// Lengths of the timed windows in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time to form a sign; resolution fires once strictly exceeded.
    pub countdown: Duration,
    /// How long the AI's sign is shown after a round.
    pub reveal: Duration,
    /// How long the final verdict is held before the match closes.
    pub finale: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN,
            reveal: REVEAL,
            finale: FINALE,
        }
    }
}
