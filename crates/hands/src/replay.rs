use super::*;
use anyhow::Context;
use rps_core::Pixels;
use std::io::BufRead;

/// Landmark frames read as newline-delimited JSON.
///
/// Each line is one camera frame, as printed by a detector bridge
/// process (e.g. a MediaPipe script writing to a pipe):
///
/// ```json
/// {"hands":[{"handedness":"Right","landmarks":[[x,y], ... 21 pairs]}],"key":"s"}
/// ```
///
/// `hands` and `key` may be omitted; a blank line is a frame with no hands.
/// Only single-character keys are kept; names like `"esc"` are skipped.
/// Coordinates are taken as pixels unless a normalizing scale is set.
pub struct Replay<R> {
    reader: R,
    line: usize,
    scale: Option<(Pixels, Pixels)>,
}

#[derive(serde::Deserialize)]
struct Record {
    #[serde(default)]
    hands: Vec<HandRecord>,
    #[serde(default)]
    key: Option<String>,
}

#[derive(serde::Deserialize)]
struct HandRecord {
    #[serde(default)]
    handedness: Option<String>,
    landmarks: Vec<Point>,
}

impl<R> Replay<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            scale: None,
        }
    }
    /// Treat incoming coordinates as normalized and scale them to a
    /// `width` x `height` image.
    pub fn normalized(self, width: Pixels, height: Pixels) -> Self {
        Self {
            scale: Some((width, height)),
            ..self
        }
    }
    fn parse(&self, text: &str) -> anyhow::Result<Frame> {
        if text.trim().is_empty() {
            return Ok(Frame::default());
        }
        let record = serde_json::from_str::<Record>(text)?;
        let hands = record
            .hands
            .into_iter()
            .map(|hand| self.hand(hand))
            .collect::<anyhow::Result<Vec<Hand>>>()?;
        let frame = Frame::from(hands);
        Ok(match record.key.as_deref().and_then(Self::key) {
            Some(key) => frame.with_key(key),
            None => frame,
        })
    }
    fn key(name: &str) -> Option<char> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Some(key),
            _ => {
                log::debug!("[replay] skipping key {:?}", name);
                None
            }
        }
    }
    fn hand(&self, record: HandRecord) -> anyhow::Result<Hand> {
        let handedness = match record.handedness {
            Some(ref label) => Handedness::try_from(label.as_str())?,
            None => Handedness::default(),
        };
        let landmarks = Landmarks::try_from(record.landmarks)?;
        let landmarks = match self.scale {
            Some((w, h)) => landmarks.scale(w, h),
            None => landmarks,
        };
        Ok(Hand::from((landmarks, handedness)))
    }
}

impl<R> Detector for Replay<R>
where
    R: BufRead,
{
    fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
        let ref mut buffer = String::new();
        let n = self
            .reader
            .read_line(buffer)
            .with_context(|| format!("read landmark line {}", self.line + 1))?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;
        let frame = self
            .parse(buffer)
            .with_context(|| format!("parse landmark line {}", self.line))?;
        log::trace!("[replay] line {} -> {} hands", self.line, frame.hands().len());
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fingers: u8, key: Option<char>) -> String {
        let points = Landmarks::from(Fingers::from(fingers))
            .points()
            .iter()
            .map(|p| format!("[{},{}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",");
        match key {
            Some(k) => format!(r#"{{"hands":[{{"handedness":"Left","landmarks":[{}]}}],"key":"{}"}}"#, points, k),
            None => format!(r#"{{"hands":[{{"landmarks":[{}]}}]}}"#, points),
        }
    }

    #[test]
    fn replays_frames_in_order() {
        let text = [line(0b00000, Some('s')), String::new(), line(0b01100, None)].join("\n");
        let mut replay = Replay::new(text.as_bytes());
        let first = replay.detect().unwrap().unwrap();
        assert!(first.sign() == Some(Sign::Rock));
        assert!(first.key() == Some('s'));
        assert!(first.primary().unwrap().handedness() == Handedness::Left);
        let blank = replay.detect().unwrap().unwrap();
        assert!(blank.primary().is_none());
        let third = replay.detect().unwrap().unwrap();
        assert!(third.sign() == Some(Sign::Scissors));
        assert!(third.primary().unwrap().handedness() == Handedness::Right);
        assert!(replay.detect().unwrap().is_none());
    }

    #[test]
    fn empty_record_has_no_hands() {
        let mut replay = Replay::new("{}\n".as_bytes());
        let frame = replay.detect().unwrap().unwrap();
        assert!(frame.hands().is_empty());
        assert!(frame.sign().is_none());
    }

    #[test]
    fn odd_keys_are_skipped_not_fatal() {
        let text = "{\"key\":\"\"}\n{\"key\":\"esc\"}\n{\"key\":\"S\"}\n{\"key\":null}\n";
        let mut replay = Replay::new(text.as_bytes());
        let keys = std::iter::from_fn(|| replay.detect().unwrap())
            .map(|frame| frame.key())
            .collect::<Vec<_>>();
        assert!(keys == vec![None, None, Some('S'), None]);
    }

    #[test]
    fn short_landmark_list_reports_line() {
        let text = "{}\n{\"hands\":[{\"landmarks\":[[1,2],[3,4]]}]}\n";
        let mut replay = Replay::new(text.as_bytes());
        assert!(replay.detect().is_ok());
        let error = replay.detect().unwrap_err();
        assert!(format!("{:#}", error).contains("line 2"));
        assert!(format!("{:#}", error).contains("expected 21 landmarks"));
    }

    #[test]
    fn normalized_coordinates_scale() {
        let points = (0..rps_core::LANDMARKS)
            .map(|_| "[0.5,0.5]")
            .collect::<Vec<_>>()
            .join(",");
        let text = format!(r#"{{"hands":[{{"landmarks":[{}]}}]}}"#, points);
        let mut replay = Replay::new(text.as_bytes()).normalized(400., 420.);
        let frame = replay.detect().unwrap().unwrap();
        let wrist = frame.primary().unwrap().landmarks()[Joint::Wrist];
        assert!(wrist == Point::new(200., 210.));
    }
}
