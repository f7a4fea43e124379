//! Rules and state machine for a best-of-three match against the computer.
//!
//! ## Rules
//!
//! - [`Outcome`] — Who won a single exchange of signs
//! - [`Round`] — One resolved play: both signs and the outcome
//! - [`Match`] — Scores and turn count, replaced wholesale on each round
//! - [`Winner`] — Final verdict once every turn is played
//!
//! ## State Machine
//!
//! - [`Machine`] — Frame-driven controller stepping through each [`Phase`]
//! - [`Input`] — What one frame contributes: the live sign and a restart flag
//! - [`Event`] — Transitions reported back to the driver
//! - [`Hud`] — What the renderer should show this frame
//!
//! ## Collaborators
//!
//! - [`Clock`] — Injectable time source ([`Wall`] or [`Manual`])
//! - [`Opponent`] — Source of the computer's sign
//! - [`Timing`] — Countdown, reveal, and finale windows
mod clock;
mod event;
mod hud;
mod input;
mod machine;
mod matches;
mod opponent;
mod outcome;
mod phase;
mod round;
mod timing;
mod winner;

pub use clock::*;
pub use event::*;
pub use hud::*;
pub use input::*;
pub use machine::*;
pub use matches::*;
pub use opponent::*;
pub use outcome::*;
pub use phase::*;
pub use round::*;
pub use timing::*;
pub use winner::*;
