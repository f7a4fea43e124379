use super::*;

/// Everything the landmark source reports for one camera frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    hands: Vec<Hand>,
    key: Option<char>,
}

impl Frame {
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    /// The tracked hand. The game follows one hand; extras are ignored.
    pub fn primary(&self) -> Option<&Hand> {
        self.hands.first()
    }
    /// Sign shown by the tracked hand, if any hand is in view.
    pub fn sign(&self) -> Option<Sign> {
        self.primary().map(Hand::sign)
    }
    /// Key pressed while this frame was captured.
    pub fn key(&self) -> Option<char> {
        self.key
    }
    pub fn with_key(self, key: char) -> Self {
        Self {
            key: Some(key),
            ..self
        }
    }
}

impl From<Vec<Hand>> for Frame {
    fn from(hands: Vec<Hand>) -> Self {
        Self { hands, key: None }
    }
}

impl From<Hand> for Frame {
    fn from(hand: Hand) -> Self {
        Self::from(vec![hand])
    }
}
