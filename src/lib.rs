//! Webcam rock-paper-scissors against the computer.
//!
//! This facade crate re-exports the roshambo workspace for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and logger bootstrap
//! - [`hands`] — Landmarks, finger states, and sign recognition
//! - [`gameplay`] — Match rules and the turn-based state machine
//! - [`players`] — Computer opponents
//! - [`gameroom`] — Frame loop, assets, and rendering

pub use rps_core     as core;
pub use rps_hands    as hands;
pub use rps_gameplay as gameplay;
pub use rps_players  as players;
pub use rps_gameroom as gameroom;

// Re-export commonly used types at the root
pub use rps_core::*;
