use std::cell::Cell;
use std::time::Duration;
use std::time::Instant;

/// Source of "now" for every timed window in a match.
///
/// Timers are polled once per frame rather than scheduled, so the
/// state machine only needs to read the time, never to wait on it.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// System monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Wall;

impl Clock for Wall {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct Manual(Cell<Instant>);

impl Manual {
    pub fn advance(&self, duration: Duration) {
        self.0.set(self.0.get() + duration);
    }
}

impl Default for Manual {
    fn default() -> Self {
        Self(Cell::new(Instant::now()))
    }
}

impl Clock for Manual {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C> Clock for std::rc::Rc<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> Instant {
        (**self).now()
    }
}
