//! Core type aliases, traits, and constants for roshambo.
//!
//! Every tunable of the game lives here so the rest of the workspace
//! agrees on timings, landmark geometry, and match length.
use std::time::Duration;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rounds won by one side of a match.
pub type Points = u8;
/// Index of the current turn within a match (0 ..= TURNS).
pub type Turn = u8;
/// Landmark coordinate, in pixels or normalized units depending on the source.
pub type Pixels = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND GEOMETRY
// ============================================================================
/// Landmarks reported per detected hand.
pub const LANDMARKS: usize = 21;
/// Digits in a finger-state vector (thumb through pinky).
pub const FINGERS: usize = 5;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds per match.
pub const TURNS: Turn = 3;
/// Time the player has to form a sign before it locks in.
pub const COUNTDOWN: Duration = Duration::from_secs(3);
/// Time the AI's move stays on screen after a round resolves.
pub const REVEAL: Duration = Duration::from_secs(2);
/// Time the final winner stays on screen before the match closes.
pub const FINALE: Duration = Duration::from_secs(3);

// ============================================================================
// FRAME LOOP
// ============================================================================
/// Target frames processed per second by the driver.
pub const FRAME_RATE: u64 = 30;
/// Key that starts (or restarts) a match.
pub const RESTART_KEY: char = 's';
/// Default directory holding `Rock.png`, `Paper.png`, `Scissors.png`.
pub const ASSETS: &str = "Resources";
/// Width of the cropped camera block the detector sees.
pub const CAMERA_WIDTH: Pixels = 400.;
/// Height of the cropped camera block the detector sees.
pub const CAMERA_HEIGHT: Pixels = 420.;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
