//! Frame loop tying a landmark source to the match state machine.
//!
//! One thread pulls a frame, classifies the tracked hand, steps the
//! [`Machine`](rps_gameplay::Machine), and renders, before pulling the next.
//!
//! ## Driver
//!
//! - [`Room`] — The frame loop itself
//! - [`Summary`] — Rounds and verdicts collected over a run
//!
//! ## Collaborators
//!
//! - [`Assets`] — Loads the AI's sign image ([`Directory`])
//! - [`Renderer`] — Draws a [`Scene`] ([`Terminal`], [`Recorder`])
//! - [`Controls`] — Start/restart key ([`Keyboard`], [`Unattended`])
mod assets;
mod controls;
mod renderer;
mod room;
mod scene;
mod summary;

pub use assets::*;
pub use controls::*;
pub use renderer::*;
pub use room::*;
pub use scene::*;
pub use summary::*;
