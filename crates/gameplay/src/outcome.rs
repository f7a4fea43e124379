use rps_hands::Sign;

/// Result of one exchange, from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    AiWin,
    Draw,
}

impl Outcome {
    /// Applies the win table. A missing or unrecognized player sign matches
    /// no entry on either side, so it comes out as a draw.
    pub fn judge(player: Option<Sign>, ai: Sign) -> Self {
        match player {
            Some(player) if player.beats(&ai) => Self::PlayerWin,
            Some(player) if ai.beats(&player) => Self::AiWin,
            _ => Self::Draw,
        }
    }
    /// Same exchange seen from the other side of the table.
    pub fn flip(&self) -> Self {
        match self {
            Self::PlayerWin => Self::AiWin,
            Self::AiWin => Self::PlayerWin,
            Self::Draw => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerWin => write!(f, "player wins"),
            Self::AiWin => write!(f, "ai wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
