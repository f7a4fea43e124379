use super::*;
use rps_core::FINGERS;
use rps_core::Pixels;

/// Up/down state of each finger, ordered thumb, index, middle, ring, pinky.
///
/// Derived per frame from one [`Landmarks`] with no smoothing or
/// confidence threshold. Packs into the low 5 bits of a `u8` with the
/// thumb as the most significant bit, so `0b01100` reads like `[0,1,1,0,0]`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Fingers([bool; FINGERS]);

impl Fingers {
    pub fn is_up(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }
    /// Number of extended fingers.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }
    /// Every possible finger-state vector, in mask order.
    pub fn all() -> impl Iterator<Item = Fingers> {
        (0..1u8 << FINGERS).map(Fingers::from)
    }
}

impl From<&Landmarks> for Fingers {
    fn from(landmarks: &Landmarks) -> Self {
        Self(Finger::all().map(|finger| finger.extended(landmarks)))
    }
}

impl From<[bool; FINGERS]> for Fingers {
    fn from(fingers: [bool; FINGERS]) -> Self {
        Self(fingers)
    }
}

/// [u8; 5] isomorphism, matching the 0/1 lists detectors usually return
impl From<[u8; FINGERS]> for Fingers {
    fn from(fingers: [u8; FINGERS]) -> Self {
        Self(fingers.map(|x| x != 0))
    }
}
impl From<Fingers> for [u8; FINGERS] {
    fn from(fingers: Fingers) -> Self {
        fingers.0.map(u8::from)
    }
}

/// u8 isomorphism over the low 5 bits
impl From<u8> for Fingers {
    fn from(mask: u8) -> Self {
        Self(std::array::from_fn(|i| mask >> (FINGERS - 1 - i) & 1 == 1))
    }
}
impl From<Fingers> for u8 {
    fn from(fingers: Fingers) -> Self {
        fingers
            .0
            .iter()
            .fold(0, |mask, &up| mask << 1 | u8::from(up))
    }
}

/// Synthesizes a schematic upright hand whose classification is exactly
/// `fingers`. Useful for demos, benchmarks, and replay fixtures.
impl From<Fingers> for Landmarks {
    fn from(fingers: Fingers) -> Self {
        const WRIST: Point = Point::new(200., 400.);
        const KNUCKLE: Pixels = 300.;
        const SPACING: Pixels = 40.;
        let mut points = [WRIST; rps_core::LANDMARKS];
        for finger in Finger::all() {
            let base = usize::from(finger.tip()) - 3;
            let up = fingers.is_up(finger);
            match finger {
                Finger::Thumb => {
                    let tip = if up { 90. } else { 150. };
                    points[base + 0] = Point::new(180., 360.);
                    points[base + 1] = Point::new(150., 330.);
                    points[base + 2] = Point::new(120., 310.);
                    points[base + 3] = Point::new(tip, 300.);
                }
                _ => {
                    let x = 140. + SPACING * finger as usize as Pixels;
                    let tip = if up { KNUCKLE - 100. } else { KNUCKLE + 10. };
                    points[base + 0] = Point::new(x, KNUCKLE);
                    points[base + 1] = Point::new(x, KNUCKLE - 40.);
                    points[base + 2] = Point::new(x, KNUCKLE - 70.);
                    points[base + 3] = Point::new(x, tip);
                }
            }
        }
        Self::from(points)
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for up in self.0 {
            write!(f, "{}", u8::from(up))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for fingers in Fingers::all() {
            assert!(fingers == Fingers::from(u8::from(fingers)));
        }
        assert!(Fingers::all().count() == 32);
    }

    #[test]
    fn mask_reads_like_list() {
        assert!(Fingers::from(0b01100u8) == Fingers::from([0u8, 1, 1, 0, 0]));
        assert!(Fingers::from([0u8, 1, 1, 0, 0]).to_string() == "01100");
    }

    #[test]
    fn classifies_synthetic_poses() {
        for fingers in Fingers::all() {
            assert!(Landmarks::from(fingers).fingers() == fingers);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let landmarks = Landmarks::from(Fingers::from(0b10110u8));
        assert!(landmarks.fingers() == landmarks.fingers());
    }

    #[test]
    fn thumb_compares_x_only() {
        let mut points = *Landmarks::from(Fingers::default()).points();
        points[3] = Point::new(100., 0.);
        points[4] = Point::new(99., 1000.);
        let fingers = Landmarks::from(points).fingers();
        assert!(fingers.is_up(Finger::Thumb));
        assert!(fingers.count() == 1);
    }

    #[test]
    fn level_tip_is_not_up() {
        let mut points = *Landmarks::from(Fingers::default()).points();
        points[8] = Point::new(180., 10.);
        points[6] = Point::new(180., 10.);
        assert!(!Landmarks::from(points).fingers().is_up(Finger::Index));
    }
}
