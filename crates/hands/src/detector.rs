use super::*;

/// A source of hand detections, pulled once per frame.
///
/// Implementations wrap whatever actually finds hands in pixels. The
/// frame loop calls [`Detector::detect`] synchronously and treats
/// `Ok(None)` as the end of the stream and `Err` as fatal.
pub trait Detector {
    fn detect(&mut self) -> anyhow::Result<Option<Frame>>;
}

impl<D> Detector for Box<D>
where
    D: Detector + ?Sized,
{
    fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
        (**self).detect()
    }
}

/// Replays a fixed list of frames, then ends.
impl Detector for std::collections::VecDeque<Frame> {
    fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
        Ok(self.pop_front())
    }
}
