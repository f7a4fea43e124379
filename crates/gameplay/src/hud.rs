use super::*;
use rps_core::Points;
use rps_hands::Sign;

/// Everything the renderer draws for one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub phase: Phase,
    /// Whole seconds elapsed in the current countdown.
    pub timer: Option<u64>,
    pub player: Points,
    pub ai: Points,
    /// The AI's sign while its result is on screen.
    pub reveal: Option<Sign>,
    /// Final verdict while the match-over screen is held.
    pub winner: Option<Winner>,
}

impl std::fmt::Display for Hud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:<8}] AI {} | {} Player", self.phase, self.ai, self.player)?;
        if let Some(timer) = self.timer {
            write!(f, " | {}", timer)?;
        }
        if let Some(sign) = self.reveal {
            write!(f, " | AI plays {}", sign)?;
        }
        if let Some(winner) = self.winner {
            write!(f, " | {}", winner)?;
        }
        Ok(())
    }
}
