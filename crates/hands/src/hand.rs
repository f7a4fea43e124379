use super::*;

/// One hand detection: its landmarks and handedness label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    landmarks: Landmarks,
    handedness: Handedness,
}

impl Hand {
    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }
    pub fn fingers(&self) -> Fingers {
        self.landmarks.fingers()
    }
    pub fn sign(&self) -> Sign {
        Sign::from(self.fingers())
    }
}

impl From<(Landmarks, Handedness)> for Hand {
    fn from((landmarks, handedness): (Landmarks, Handedness)) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hand {} {}", self.handedness, self.fingers(), self.sign())
    }
}
