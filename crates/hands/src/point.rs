use rps_core::Pixels;

/// A landmark position in image coordinates.
///
/// Image y grows downward, so a fingertip "above" its knuckle
/// has the smaller y.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(from = "(Pixels, Pixels)")]
pub struct Point {
    pub x: Pixels,
    pub y: Pixels,
}

impl Point {
    pub const fn new(x: Pixels, y: Pixels) -> Self {
        Self { x, y }
    }
    /// Converts a normalized [0, 1] position into whole pixels of a
    /// `width` x `height` image, truncating toward zero.
    pub fn scale(self, width: Pixels, height: Pixels) -> Self {
        Self {
            x: (self.x * width).trunc(),
            y: (self.y * height).trunc(),
        }
    }
}

impl From<(Pixels, Pixels)> for Point {
    fn from((x, y): (Pixels, Pixels)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
