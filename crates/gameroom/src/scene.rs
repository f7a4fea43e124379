use super::*;
use rps_gameplay::Hud;

/// Everything drawn for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub hud: Hud,
    /// The AI's sign image, when it is on screen and loaded.
    pub sprite: Option<&'a Sprite>,
    /// Hands the detector found this frame.
    pub hands: usize,
    /// Frames per second measured since the previous frame.
    pub fps: Option<f32>,
}
