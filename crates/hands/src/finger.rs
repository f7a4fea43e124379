use super::*;
use rps_core::FINGERS;

/// One digit of the hand, in finger-state vector order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    /// All fingers, thumb first.
    pub const fn all() -> [Finger; FINGERS] {
        [
            Finger::Thumb,
            Finger::Index,
            Finger::Middle,
            Finger::Ring,
            Finger::Pinky,
        ]
    }
    /// Landmark at the end of the digit.
    pub const fn tip(&self) -> Joint {
        match self {
            Finger::Thumb => Joint::ThumbTip,
            Finger::Index => Joint::IndexTip,
            Finger::Middle => Joint::MiddleTip,
            Finger::Ring => Joint::RingTip,
            Finger::Pinky => Joint::PinkyTip,
        }
    }
    /// Landmark the tip is compared against: the joint right below the
    /// thumb tip, two joints below every other tip.
    pub const fn reference(&self) -> Joint {
        match self {
            Finger::Thumb => Joint::ThumbIp,
            Finger::Index => Joint::IndexPip,
            Finger::Middle => Joint::MiddlePip,
            Finger::Ring => Joint::RingPip,
            Finger::Pinky => Joint::PinkyPip,
        }
    }
    /// Whether this digit is extended.
    ///
    /// The thumb folds sideways, so it is judged on x: extended when the
    /// tip lies left of its reference in the detector's usual mirrored
    /// view. This ignores handedness. The others fold downward and are
    /// judged on y.
    pub fn extended(&self, landmarks: &Landmarks) -> bool {
        let tip = landmarks[self.tip()];
        let reference = landmarks[self.reference()];
        match self {
            Finger::Thumb => tip.x < reference.x,
            _ => tip.y < reference.y,
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finger::Thumb => write!(f, "thumb"),
            Finger::Index => write!(f, "index"),
            Finger::Middle => write!(f, "middle"),
            Finger::Ring => write!(f, "ring"),
            Finger::Pinky => write!(f, "pinky"),
        }
    }
}
