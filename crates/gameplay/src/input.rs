use rps_hands::Sign;

/// What one processed frame feeds the state machine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    /// Sign of the tracked hand this frame, `None` if no hand is in view.
    pub sign: Option<Sign>,
    /// Start or restart the match.
    pub restart: bool,
}

impl Input {
    pub fn restart() -> Self {
        Self {
            sign: None,
            restart: true,
        }
    }
}

impl From<Option<Sign>> for Input {
    fn from(sign: Option<Sign>) -> Self {
        Self {
            sign,
            restart: false,
        }
    }
}

impl From<Sign> for Input {
    fn from(sign: Sign) -> Self {
        Self::from(Some(sign))
    }
}
