//! Computer opponents implementing [`Opponent`] from [`rps_gameplay`].
//!
//! ## Implementations
//!
//! - [`Fish`] — Uniformly random signs, optionally seeded
//! - [`Scripted`] — A fixed, repeating sequence of signs
//!
//! [`Opponent`]: rps_gameplay::Opponent
mod fish;
mod scripted;

pub use fish::*;
pub use scripted::*;
