use rps_gameplay::*;

/// What happened over one run of the room.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    frames: usize,
    rounds: Vec<Round>,
    winners: Vec<Winner>,
}

impl Summary {
    /// Frames processed.
    pub fn frames(&self) -> usize {
        self.frames
    }
    /// Rounds of the most recent match, in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    /// Verdicts of every match that reached the end.
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winners.last().copied()
    }
    pub fn frame(&mut self) {
        self.frames += 1;
    }
    pub fn witness(&mut self, event: &Event) {
        match event {
            Event::Started => self.rounds.clear(),
            Event::Resolved(round) => self.rounds.push(*round),
            Event::Finished(winner) => self.winners.push(*winner),
            Event::Revealed | Event::Closed(_) => {}
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} frames, {} matches", self.frames, self.winners.len())?;
        for (i, round) in self.rounds.iter().enumerate() {
            writeln!(f, "  round {}: {}", i + 1, round)?;
        }
        match self.winner() {
            Some(winner) => write!(f, "  {}", winner),
            None => write!(f, "  no match finished"),
        }
    }
}
