use super::*;
use rps_hands::Sign;
use std::time::Duration;
use std::time::Instant;

/// Turn-based controller for one match, advanced once per frame.
///
/// Owns the only copy of the match state. Each [`Machine::step`] reads the
/// clock once, applies at most one transition, and reports it. Timers are
/// polled, so their resolution is the caller's frame interval.
///
/// ```text
/// Idle --restart--> CountingDown --(> countdown)--> [resolve] --> ShowingResult
///                        ^                                            |
///                        +------------(>= reveal, turns left)---------+
///                                                                     |
/// Idle <--(>= finale)-- MatchOver <--------(>= reveal, last turn)-----+
/// ```
///
/// A restart is honored at the top of any step, before anything else is
/// looked at, so it can never land in the middle of a resolution.
#[derive(Debug)]
pub struct Machine<C, O> {
    clock: C,
    opponent: O,
    timing: Timing,
    phase: Phase,
    score: Match,
}

impl<C, O> Machine<C, O>
where
    C: Clock,
    O: Opponent,
{
    pub fn new(clock: C, opponent: O) -> Self {
        Self {
            clock,
            opponent,
            timing: Timing::default(),
            phase: Phase::Idle,
            score: Match::default(),
        }
    }
    pub fn with_timing(self, timing: Timing) -> Self {
        Self { timing, ..self }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn score(&self) -> Match {
        self.score
    }

    /// Advance by one frame.
    pub fn step(&mut self, input: Input) -> Option<Event> {
        let now = self.clock.now();
        if input.restart {
            return Some(self.start(now));
        }
        let event = match self.phase {
            Phase::CountingDown { since } if Self::elapsed(now, since) > self.timing.countdown => {
                self.resolve(now, input.sign)
            }
            Phase::ShowingResult { since, .. } if Self::elapsed(now, since) >= self.timing.reveal => {
                self.reveal(now)
            }
            Phase::MatchOver { since, winner } if Self::elapsed(now, since) >= self.timing.finale => {
                self.close(winner)
            }
            _ => return None,
        };
        Some(event)
    }

    /// Render snapshot for the current frame.
    pub fn hud(&self) -> Hud {
        let now = self.clock.now();
        Hud {
            phase: self.phase,
            timer: match self.phase {
                Phase::CountingDown { since } => Some(Self::elapsed(now, since).as_secs()),
                _ => None,
            },
            player: self.score.player(),
            ai: self.score.ai(),
            reveal: match self.phase {
                Phase::ShowingResult { round, .. } => Some(round.ai()),
                _ => None,
            },
            winner: match self.phase {
                Phase::MatchOver { winner, .. } => Some(winner),
                _ => None,
            },
        }
    }
}

impl<C, O> Machine<C, O>
where
    C: Clock,
    O: Opponent,
{
    fn elapsed(now: Instant, since: Instant) -> Duration {
        now.saturating_duration_since(since)
    }
    fn start(&mut self, now: Instant) -> Event {
        if !self.phase.is_idle() {
            log::info!("[machine] restarting from {} at {}", self.phase, self.score);
        }
        self.score = Match::default();
        self.phase = Phase::CountingDown { since: now };
        log::info!("[machine] match started");
        Event::Started
    }
    fn resolve(&mut self, now: Instant, player: Option<Sign>) -> Event {
        let ai = self.opponent.throw();
        let round = Round::play(player, ai);
        self.score = self.score.apply(&round);
        self.phase = Phase::ShowingResult { since: now, round };
        log::info!("[machine] turn {}: {} -> {}", self.score.turn(), round, self.score);
        Event::Resolved(round)
    }
    fn reveal(&mut self, now: Instant) -> Event {
        if self.score.is_over() {
            let winner = self.score.winner();
            self.phase = Phase::MatchOver { since: now, winner };
            log::info!("[machine] {} at {}", winner, self.score);
            Event::Finished(winner)
        } else {
            self.phase = Phase::CountingDown { since: now };
            log::debug!("[machine] counting down turn {}", self.score.turn() + 1);
            Event::Revealed
        }
    }
    fn close(&mut self, winner: Winner) -> Event {
        self.phase = Phase::Idle;
        log::debug!("[machine] match closed");
        Event::Closed(winner)
    }
}
