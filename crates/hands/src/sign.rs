use super::*;
use rps_core::Arbitrary;

/// A hand sign recognized from a finger-state vector.
///
/// Only three exact patterns are recognized; everything else is
/// `Unknown`, which can neither win nor lose a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Sign {
    /// The signs an opponent can throw.
    pub const fn playable() -> [Sign; 3] {
        [Sign::Rock, Sign::Paper, Sign::Scissors]
    }
    pub fn is_known(&self) -> bool {
        !matches!(self, Sign::Unknown)
    }
    /// Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
    pub fn beats(&self, other: &Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Rock, Sign::Scissors) | (Sign::Paper, Sign::Rock) | (Sign::Scissors, Sign::Paper)
        )
    }
}

impl From<Fingers> for Sign {
    fn from(fingers: Fingers) -> Self {
        match <[u8; 5]>::from(fingers) {
            [0, 0, 0, 0, 0] => Sign::Rock,
            [1, 1, 1, 1, 1] => Sign::Paper,
            [0, 1, 1, 0, 0] => Sign::Scissors,
            _ => Sign::Unknown,
        }
    }
}

impl Arbitrary for Sign {
    fn random() -> Self {
        Self::playable()[rand::random_range(0..Self::playable().len())]
    }
}

/// str isomorphism
impl TryFrom<&str> for Sign {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Sign::Rock),
            "paper" | "p" => Ok(Sign::Paper),
            "scissors" | "s" => Ok(Sign::Scissors),
            "unknown" | "?" => Ok(Sign::Unknown),
            _ => Err(anyhow::anyhow!("invalid sign: {}", s)),
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Rock => write!(f, "Rock"),
            Sign::Paper => write!(f, "Paper"),
            Sign::Scissors => write!(f, "Scissors"),
            Sign::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_vectors() {
        assert!(Sign::from(Fingers::from([0u8, 0, 0, 0, 0])) == Sign::Rock);
        assert!(Sign::from(Fingers::from([1u8, 1, 1, 1, 1])) == Sign::Paper);
        assert!(Sign::from(Fingers::from([0u8, 1, 1, 0, 0])) == Sign::Scissors);
    }

    #[test]
    fn every_other_vector_is_unknown() {
        let known = [0b00000, 0b11111, 0b01100];
        for fingers in Fingers::all().filter(|f| !known.contains(&u8::from(*f))) {
            assert!(Sign::from(fingers) == Sign::Unknown, "{}", fingers);
        }
    }

    #[test]
    fn exactly_one_side_beats_the_other() {
        for a in Sign::playable() {
            for b in Sign::playable() {
                let wins = [a.beats(&b), b.beats(&a)];
                match a == b {
                    true => assert!(wins == [false, false]),
                    false => assert!(wins[0] ^ wins[1]),
                }
            }
        }
    }

    #[test]
    fn unknown_never_beats_or_loses() {
        for sign in Sign::playable() {
            assert!(!Sign::Unknown.beats(&sign));
            assert!(!sign.beats(&Sign::Unknown));
        }
    }

    #[test]
    fn random_is_playable() {
        for _ in 0..64 {
            assert!(Sign::random().is_known());
        }
    }

    #[test]
    fn bijective_str() {
        for sign in Sign::playable() {
            assert!(Sign::try_from(sign.to_string().as_str()).unwrap() == sign);
        }
    }
}
