use rps_core::LANDMARKS;

/// Anatomical landmark numbering used by MediaPipe-style hand detectors.
///
/// Each finger contributes four joints ordered from the palm outward,
/// so a fingertip is always the last index of its group.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Joint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl Joint {
    /// All joints in index order.
    pub const fn all() -> [Joint; LANDMARKS] {
        [
            Joint::Wrist,
            Joint::ThumbCmc,
            Joint::ThumbMcp,
            Joint::ThumbIp,
            Joint::ThumbTip,
            Joint::IndexMcp,
            Joint::IndexPip,
            Joint::IndexDip,
            Joint::IndexTip,
            Joint::MiddleMcp,
            Joint::MiddlePip,
            Joint::MiddleDip,
            Joint::MiddleTip,
            Joint::RingMcp,
            Joint::RingPip,
            Joint::RingDip,
            Joint::RingTip,
            Joint::PinkyMcp,
            Joint::PinkyPip,
            Joint::PinkyDip,
            Joint::PinkyTip,
        ]
    }
}

/// usize isomorphism
impl From<Joint> for usize {
    fn from(joint: Joint) -> usize {
        joint as usize
    }
}
impl TryFrom<usize> for Joint {
    type Error = anyhow::Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(index)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("landmark index out of range: {}", index))
    }
}
