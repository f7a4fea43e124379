//! Hand landmarks and the rules that turn them into hand signs.
//!
//! The hard part (finding a hand in pixels) belongs to an external detector.
//! This crate starts from its output and stays purely geometric.
//!
//! ## Geometry
//!
//! - [`Point`] — One 2-D landmark position
//! - [`Joint`] — Anatomical index of a landmark (0 = wrist .. 20 = pinky tip)
//! - [`Landmarks`] — Exactly 21 points for one hand
//! - [`Hand`] — Landmarks plus the detector's [`Handedness`] label
//!
//! ## Classification
//!
//! - [`Finger`] — Which digit, and which joints decide whether it is up
//! - [`Fingers`] — The 5-element up/down vector
//! - [`Sign`] — Rock, Paper, Scissors, or Unknown
//!
//! ## Sources
//!
//! - [`Detector`] — Anything producing one [`Frame`] of hands per call
//! - [`Replay`] — Newline-delimited JSON frames from a file or pipe
mod detector;
mod finger;
mod fingers;
mod frame;
mod hand;
mod handedness;
mod joint;
mod landmarks;
mod point;
mod replay;
mod sign;

pub use detector::*;
pub use finger::*;
pub use fingers::*;
pub use frame::*;
pub use hand::*;
pub use handedness::*;
pub use joint::*;
pub use landmarks::*;
pub use point::*;
pub use replay::*;
pub use sign::*;
