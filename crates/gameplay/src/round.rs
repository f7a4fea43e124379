use super::*;
use rps_hands::Sign;

/// One resolved play. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    player: Option<Sign>,
    ai: Sign,
    outcome: Outcome,
}

impl Round {
    /// `player` is `None` when no hand was in view at lock-in.
    pub fn play(player: Option<Sign>, ai: Sign) -> Self {
        Self {
            player,
            ai,
            outcome: Outcome::judge(player, ai),
        }
    }
    pub fn player(&self) -> Option<Sign> {
        self.player
    }
    pub fn ai(&self) -> Sign {
        self.ai
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Some(player) => write!(f, "{} vs {} ({})", player, self.ai, self.outcome),
            None => write!(f, "no hand vs {} ({})", self.ai, self.outcome),
        }
    }
}
