/// Verdict of a finished match.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Winner {
    Player,
    Ai,
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Player Wins!"),
            Self::Ai => write!(f, "AI Wins!"),
            Self::Draw => write!(f, "It's a Draw!"),
        }
    }
}
