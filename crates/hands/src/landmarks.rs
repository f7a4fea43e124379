use super::*;
use rps_core::LANDMARKS;
use rps_core::Pixels;

/// Exactly 21 landmark positions for one detected hand.
///
/// The fixed-size array makes a short or absent landmark list
/// unrepresentable past construction; [`TryFrom<Vec<Point>>`] is the
/// only fallible entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmarks([Point; LANDMARKS]);

impl Landmarks {
    pub fn points(&self) -> &[Point; LANDMARKS] {
        &self.0
    }
    /// Rescale every point from normalized to pixel coordinates.
    pub fn scale(self, width: Pixels, height: Pixels) -> Self {
        Self(self.0.map(|p| p.scale(width, height)))
    }
    /// Finger-state vector for this hand.
    pub fn fingers(&self) -> Fingers {
        Fingers::from(self)
    }
}

impl std::ops::Index<Joint> for Landmarks {
    type Output = Point;
    fn index(&self, joint: Joint) -> &Point {
        &self.0[usize::from(joint)]
    }
}

impl From<[Point; LANDMARKS]> for Landmarks {
    fn from(points: [Point; LANDMARKS]) -> Self {
        Self(points)
    }
}

impl TryFrom<Vec<Point>> for Landmarks {
    type Error = anyhow::Error;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        let n = points.len();
        <[Point; LANDMARKS]>::try_from(points)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("expected {} landmarks, got {}", LANDMARKS, n))
    }
}
