use super::*;
use rps_core::Points;
use rps_core::TURNS;
use rps_core::Turn;

/// Scores and progress of one match.
///
/// Never mutated in place: each resolved [`Round`] produces the successor
/// value through [`Match::apply`]. Draws advance the turn without scoring,
/// so `player + ai <= turn <= TURNS` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    player: Points,
    ai: Points,
    turn: Turn,
}

impl Match {
    pub fn player(&self) -> Points {
        self.player
    }
    pub fn ai(&self) -> Points {
        self.ai
    }
    /// Rounds played so far.
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn is_over(&self) -> bool {
        self.turn >= TURNS
    }
    /// Match state after `round`. Rounds past the last turn are ignored.
    pub fn apply(self, round: &Round) -> Self {
        if self.is_over() {
            log::warn!("[match] ignoring round after turn {}", self.turn);
            return self;
        }
        match round.outcome() {
            Outcome::PlayerWin => Self {
                player: self.player + 1,
                turn: self.turn + 1,
                ..self
            },
            Outcome::AiWin => Self {
                ai: self.ai + 1,
                turn: self.turn + 1,
                ..self
            },
            Outcome::Draw => Self {
                turn: self.turn + 1,
                ..self
            },
        }
    }
    /// Strictly more points wins; equal points is a draw.
    pub fn winner(&self) -> Winner {
        match self.player.cmp(&self.ai) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Ai,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AI {} - {} Player (turn {}/{})",
            self.ai, self.player, self.turn, TURNS
        )
    }
}
