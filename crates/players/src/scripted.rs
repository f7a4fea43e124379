use rps_gameplay::*;
use rps_hands::Sign;

/// Computer player that cycles through a fixed list of signs.
#[derive(Debug, Clone)]
pub struct Scripted {
    signs: Vec<Sign>,
    next: usize,
}

impl Scripted {
    /// Throws `signs` in order, wrapping around. Unknown entries are
    /// skipped since they are not throwable; an empty script throws Rock.
    pub fn new(signs: Vec<Sign>) -> Self {
        let signs = signs.into_iter().filter(Sign::is_known).collect::<Vec<_>>();
        match signs.is_empty() {
            true => Self::from(Sign::Rock),
            false => Self { signs, next: 0 },
        }
    }
}

impl From<Sign> for Scripted {
    fn from(sign: Sign) -> Self {
        Self {
            signs: vec![sign],
            next: 0,
        }
    }
}

impl TryFrom<&str> for Scripted {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(Sign::try_from)
            .collect::<anyhow::Result<Vec<Sign>>>()
            .map(Self::new)
    }
}

impl Opponent for Scripted {
    fn throw(&mut self) -> Sign {
        let sign = self.signs[self.next % self.signs.len()];
        self.next += 1;
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles() {
        let mut script = Scripted::new(vec![Sign::Rock, Sign::Paper]);
        let throws = (0..5).map(|_| script.throw()).collect::<Vec<_>>();
        assert!(throws == vec![Sign::Rock, Sign::Paper, Sign::Rock, Sign::Paper, Sign::Rock]);
    }

    #[test]
    fn parses_lists() {
        let mut script = Scripted::try_from("paper, s r").unwrap();
        assert!(script.throw() == Sign::Paper);
        assert!(script.throw() == Sign::Scissors);
        assert!(script.throw() == Sign::Rock);
        assert!(Scripted::try_from("rock,lizard").is_err());
    }

    #[test]
    fn never_throws_unknown() {
        let mut script = Scripted::new(vec![Sign::Unknown]);
        assert!(script.throw() == Sign::Rock);
    }
}
