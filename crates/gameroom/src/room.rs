use super::*;
use anyhow::Context;
use rps_core::*;
use rps_gameplay::*;
use rps_hands::*;
use std::time::Duration;
use std::time::Instant;

/// The frame loop.
///
/// Pulls one frame from the detector, feeds the tracked hand's sign and
/// any restart press to the [`Machine`], keeps the AI sprite in step with
/// the result window, and renders, all before pulling the next frame.
///
/// Detector and renderer failures end the run. A missing sprite is
/// logged and the round carries on without an image.
pub struct Room<C, O> {
    machine: Machine<C, O>,
    detector: Box<dyn Detector>,
    renderer: Box<dyn Renderer>,
    assets: Box<dyn Assets>,
    controls: Box<dyn Controls>,
    sprite: Option<Sprite>,
    pending: bool,
    persist: bool,
    pace: Option<Duration>,
    last: Option<Instant>,
    summary: Summary,
}

impl<C, O> Room<C, O>
where
    C: Clock,
    O: Opponent,
{
    pub fn new<D>(machine: Machine<C, O>, detector: D) -> Self
    where
        D: Detector + 'static,
    {
        Self {
            machine,
            detector: Box::new(detector),
            renderer: Box::new(Terminal::default()),
            assets: Box::new(Directory::new(ASSETS)),
            controls: Box::new(Unattended),
            sprite: None,
            pending: false,
            persist: false,
            pace: None,
            last: None,
            summary: Summary::default(),
        }
    }
    pub fn renderer<R>(self, renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        Self {
            renderer: Box::new(renderer),
            ..self
        }
    }
    pub fn assets<A>(self, assets: A) -> Self
    where
        A: Assets + 'static,
    {
        Self {
            assets: Box::new(assets),
            ..self
        }
    }
    pub fn controls<K>(self, controls: K) -> Self
    where
        K: Controls + 'static,
    {
        Self {
            controls: Box::new(controls),
            ..self
        }
    }
    /// Sleep between frames to hold `fps` frames per second.
    pub fn paced(self, fps: u64) -> Self {
        Self {
            pace: Some(Duration::from_secs_f64(1. / fps.max(1) as f64)),
            ..self
        }
    }
    /// Keep running after a match closes, waiting for the next start.
    pub fn persistent(self) -> Self {
        Self {
            persist: true,
            ..self
        }
    }
    /// Start the first match on the first frame without a key press.
    pub fn autostart(self) -> Self {
        Self {
            pending: true,
            ..self
        }
    }
    /// Run until the detector runs dry or, unless persistent, a match closes.
    pub fn run(mut self) -> anyhow::Result<Summary> {
        log::info!("[room] entering frame loop");
        while let Some(frame) = self.detector.detect().context("detect hands")? {
            let start = Instant::now();
            if self.tick(&frame)? && !self.persist {
                log::info!("[room] match closed, leaving frame loop");
                break;
            }
            self.pace(start);
        }
        log::info!("[room] processed {} frames", self.summary.frames());
        Ok(self.summary)
    }

    /// Process one frame. True when a match just closed.
    pub fn tick(&mut self, frame: &Frame) -> anyhow::Result<bool> {
        self.summary.frame();
        let input = Input {
            sign: frame.sign(),
            restart: self.restart(frame),
        };
        if let Some(hand) = frame.primary() {
            log::trace!("[room] {}", hand);
        }
        let closed = match self.machine.step(input) {
            Some(event) => self.handle(event),
            None => false,
        };
        let fps = self.fps();
        let scene = Scene {
            hud: self.machine.hud(),
            sprite: self.sprite.as_ref(),
            hands: frame.hands().len(),
            fps,
        };
        self.renderer.render(&scene).context("render frame")?;
        Ok(closed)
    }
}

impl<C, O> Room<C, O>
where
    C: Clock,
    O: Opponent,
{
    fn restart(&mut self, frame: &Frame) -> bool {
        let pending = std::mem::take(&mut self.pending);
        let keyed = frame
            .key()
            .is_some_and(|k| k.eq_ignore_ascii_case(&RESTART_KEY));
        let pressed = self.controls.restart();
        pending || keyed || pressed
    }
    fn handle(&mut self, event: Event) -> bool {
        log::debug!("[room] {}", event);
        self.summary.witness(&event);
        match event {
            Event::Resolved(round) => {
                self.sprite = match self.assets.load(round.ai()) {
                    Ok(sprite) => Some(sprite),
                    Err(e) => {
                        log::error!("[room] {:#}", e);
                        None
                    }
                };
                false
            }
            Event::Started | Event::Revealed | Event::Finished(_) => {
                self.sprite = None;
                false
            }
            Event::Closed(_) => true,
        }
    }
    /// Measured rate since the previous frame; `None` on the first.
    fn fps(&mut self) -> Option<f32> {
        let now = Instant::now();
        let fps = self
            .last
            .replace(now)
            .map(|last| 1. / now.duration_since(last).as_secs_f32().max(1e-6));
        if let Some(fps) = fps {
            log::trace!("[room] {:.0} fps", fps);
        }
        fps
    }
    fn pace(&self, start: Instant) {
        if let Some(interval) = self.pace {
            if let Some(rest) = interval.checked_sub(start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_players::Scripted;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Detector that moves a shared clock forward before every frame.
    struct Ticking {
        frames: VecDeque<Frame>,
        clock: Rc<Manual>,
        interval: Duration,
    }

    impl Detector for Ticking {
        fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
            self.clock.advance(self.interval);
            Ok(self.frames.pop_front())
        }
    }

    struct Broken;

    impl Detector for Broken {
        fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
            Err(anyhow::anyhow!("camera unplugged"))
        }
    }

    struct Missing;

    impl Assets for Missing {
        fn load(&mut self, sign: Sign) -> anyhow::Result<Sprite> {
            Err(anyhow::anyhow!("image {}.png could not be loaded", sign))
        }
    }

    fn hand(fingers: u8) -> Frame {
        let landmarks = Landmarks::from(Fingers::from(fingers));
        Frame::from(Hand::from((landmarks, Handedness::Right)))
    }

    /// `seconds` of the same pose at 10 fps, with a start key up front.
    fn session(fingers: Option<u8>, seconds: usize) -> VecDeque<Frame> {
        let frame = fingers.map(hand).unwrap_or_default();
        std::iter::once(frame.clone().with_key(RESTART_KEY))
            .chain(std::iter::repeat(frame).take(seconds * 10))
            .collect()
    }

    fn room(
        frames: VecDeque<Frame>,
        script: &[Sign],
    ) -> (Room<Rc<Manual>, Scripted>, Recorder) {
        let clock = Rc::new(Manual::default());
        let machine = Machine::new(clock.clone(), Scripted::new(script.to_vec()));
        let recorder = Recorder::default();
        let detector = Ticking {
            frames,
            clock,
            interval: Duration::from_millis(100),
        };
        let room = Room::new(machine, detector)
            .renderer(recorder.clone())
            .assets(Missing);
        (room, recorder)
    }

    #[test]
    fn plays_a_full_match() {
        let (room, recorder) = room(session(Some(0b00000), 30), &[Sign::Paper]);
        let summary = room.run().unwrap();
        assert!(summary.rounds().len() == 3);
        assert!(summary.rounds().iter().all(|r| r.outcome() == Outcome::AiWin));
        assert!(summary.winner() == Some(Winner::Ai));
        let last = recorder.last().unwrap();
        assert!(last.hud.ai == 3);
        assert!(last.hud.player == 0);
    }

    #[test]
    fn stops_when_match_closes() {
        let (room, _) = room(session(Some(0b01100), 60), &[Sign::Paper]);
        let summary = room.run().unwrap();
        assert!(summary.winner() == Some(Winner::Player));
        assert!(summary.frames() < 60 * 10);
    }

    #[test]
    fn missing_sprite_does_not_stall_the_match() {
        let (room, recorder) = room(session(None, 30), &[Sign::Rock]);
        let summary = room.run().unwrap();
        assert!(summary.winner() == Some(Winner::Draw));
        let shots = recorder.shots();
        assert!(shots.iter().any(|s| s.hud.reveal == Some(Sign::Rock)));
        assert!(shots.iter().all(|s| !s.sprite));
        assert!(shots.iter().all(|s| s.hands == 0));
    }

    #[test]
    fn waits_for_start_key() {
        let frames = std::iter::repeat(hand(0b11111)).take(100).collect();
        let (room, recorder) = room(frames, &[Sign::Rock]);
        let summary = room.run().unwrap();
        assert!(summary.rounds().is_empty());
        assert!(recorder.shots().iter().all(|s| s.hud.phase.is_idle()));
    }

    #[test]
    fn autostart_without_key() {
        let frames = std::iter::repeat(hand(0b11111)).take(300).collect();
        let (room, _) = room(frames, &[Sign::Rock]);
        let summary = room.autostart().run().unwrap();
        assert!(summary.winner() == Some(Winner::Player));
    }

    #[test]
    fn restart_key_mid_match() {
        let mut frames = session(Some(0b00000), 5);
        frames.push_back(hand(0b00000).with_key('S'));
        frames.extend(std::iter::repeat(hand(0b00000)).take(20));
        let (room, recorder) = room(frames, &[Sign::Scissors]);
        let summary = room.run().unwrap();
        assert!(summary.rounds().is_empty());
        assert!(recorder.last().unwrap().hud.player == 0);
        assert!(recorder.shots().iter().any(|s| s.hud.player == 1));
    }

    #[test]
    fn sprite_follows_result_window() {
        let dir = std::env::temp_dir().join(format!("rps-room-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        image::RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]))
            .save(dir.join("Rock.png"))
            .unwrap();
        let (room, recorder) = room(session(Some(0b11111), 30), &[Sign::Rock]);
        room.assets(Directory::new(dir)).run().unwrap();
        let shots = recorder.shots();
        assert!(shots.iter().any(|s| s.sprite));
        assert!(shots.iter().all(|s| s.sprite == s.hud.reveal.is_some()));
    }

    #[test]
    fn corrupt_sprite_is_skipped() {
        let dir = std::env::temp_dir().join(format!("rps-room-corrupt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(b"truncated");
        std::fs::write(dir.join("Rock.png"), bytes).unwrap();
        let (room, recorder) = room(session(Some(0b11111), 30), &[Sign::Rock]);
        let summary = room.assets(Directory::new(dir)).run().unwrap();
        assert!(summary.winner() == Some(Winner::Player));
        assert!(recorder.shots().iter().all(|s| !s.sprite));
    }

    #[test]
    fn pacing_survives_any_frame_rate() {
        let (room, _) = room(VecDeque::new(), &[Sign::Rock]);
        let room = room.paced(1 << 32);
        assert!(room.pace.is_some_and(|p| p < Duration::from_micros(1)));
        let room = room.paced(0);
        assert!(room.pace == Some(Duration::from_secs(1)));
        let room = room.paced(u64::MAX).paced(30);
        assert!(room.pace == Some(Duration::from_secs_f64(1. / 30.)));
    }

    #[test]
    fn measures_frame_rate_after_first_frame() {
        let (room, recorder) = room(session(None, 1), &[Sign::Rock]);
        room.run().unwrap();
        let shots = recorder.shots();
        assert!(shots[0].fps.is_none());
        assert!(shots[1..].iter().all(|s| s.fps.is_some()));
    }

    #[test]
    fn persistent_room_plays_back_to_back_matches() {
        let mut frames = session(Some(0b01100), 20);
        frames.extend(session(Some(0b00000), 20));
        let (room, _) = room(frames, &[Sign::Paper]);
        let summary = room.persistent().run().unwrap();
        assert!(summary.winners() == [Winner::Player, Winner::Ai]);
        assert!(summary.frames() == 2 * (1 + 20 * 10));
    }

    #[test]
    fn detector_failure_is_fatal() {
        let clock = Rc::new(Manual::default());
        let machine = Machine::new(clock, Scripted::from(Sign::Rock));
        let room = Room::new(machine, Broken).renderer(Recorder::default());
        let error = room.run().unwrap_err();
        assert!(format!("{:#}", error).contains("camera unplugged"));
    }
}
