/// Which hand the detector believes it saw.
///
/// Carried alongside the landmarks but not consulted by the classifier:
/// the thumb rule assumes the camera's usual mirroring for either hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl TryFrom<&str> for Handedness {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(anyhow::anyhow!("invalid handedness: {}", s)),
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}
