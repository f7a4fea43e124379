use super::*;

/// Transitions reported by [`Machine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Scores and turn reset; first countdown begins.
    Started,
    /// A round locked in and scored.
    Resolved(Round),
    /// Result window closed; next countdown begins.
    Revealed,
    /// Last result window closed; verdict is on screen.
    Finished(Winner),
    /// Verdict hold elapsed; machine is idle again.
    Closed(Winner),
}

impl Event {
    pub fn round(&self) -> Option<Round> {
        match self {
            Self::Resolved(round) => Some(*round),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "match started"),
            Self::Resolved(round) => write!(f, "round resolved: {}", round),
            Self::Revealed => write!(f, "next turn"),
            Self::Finished(winner) => write!(f, "match over: {}", winner),
            Self::Closed(winner) => write!(f, "match closed: {}", winner),
        }
    }
}
