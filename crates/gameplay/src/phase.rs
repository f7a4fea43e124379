use super::*;
use std::time::Instant;

/// Where the match is between frames.
///
/// Resolution is not a phase: it happens entirely inside the step that
/// leaves `CountingDown`, so no frame ever observes it half done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start key.
    #[default]
    Idle,
    /// Player is forming a sign; the turn began at `since`.
    CountingDown { since: Instant },
    /// The AI's sign from `round` is on screen since `since`.
    ShowingResult { since: Instant, round: Round },
    /// All turns played; verdict held since `since`.
    MatchOver { since: Instant, winner: Winner },
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    pub fn is_counting(&self) -> bool {
        matches!(self, Self::CountingDown { .. })
    }
    pub fn is_over(&self) -> bool {
        matches!(self, Self::MatchOver { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => f.pad("idle"),
            Self::CountingDown { .. } => f.pad("counting"),
            Self::ShowingResult { .. } => f.pad("showing"),
            Self::MatchOver { .. } => f.pad("over"),
        }
    }
}
