//! Roshambo Binary
//!
//! Plays best-of-three matches from a stream of hand landmarks.
//!
//! Landmarks arrive as newline-delimited JSON, one camera frame per line,
//! from a file or from stdin (typically piped from a hand-tracking bridge).
//! Type `s` + Enter (or send `"key":"s"` in a frame) to start a match.

use anyhow::Context;
use clap::Parser;
use rps_core::*;
use rps_gameplay::*;
use rps_gameroom::*;
use rps_hands::*;
use rps_players::*;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "-", help = "Landmark frames as JSON lines, '-' for stdin")]
    landmarks: String,
    #[arg(long, default_value = ASSETS, help = "Directory holding Rock.png, Paper.png, Scissors.png")]
    assets: PathBuf,
    #[arg(long, help = "Seed the AI for a reproducible match")]
    seed: Option<u64>,
    #[arg(long, help = "Fixed AI throws instead of random, e.g. 'rock,paper,scissors'")]
    script: Option<String>,
    #[arg(long, default_value_t = FRAME_RATE, help = "Frames processed per second")]
    fps: u64,
    #[arg(long, help = "Landmarks are normalized to [0, 1]; scale them to the camera block")]
    normalized: bool,
    #[arg(long, default_value_t = COUNTDOWN.as_secs_f32(), help = "Seconds to form a sign")]
    countdown: f32,
    #[arg(long, default_value_t = REVEAL.as_secs_f32(), help = "Seconds the AI's sign is shown")]
    reveal: f32,
    #[arg(long, default_value_t = FINALE.as_secs_f32(), help = "Seconds the verdict is shown")]
    finale: f32,
    #[arg(long, help = "Start the first match without waiting for the start key")]
    autostart: bool,
    #[arg(long, help = "Keep playing matches until the landmark stream ends")]
    keep_running: bool,
    #[arg(short, long, help = "Log debug output to the terminal")]
    verbose: bool,
}

impl Args {
    fn timing(&self) -> anyhow::Result<Timing> {
        let seconds = |name: &str, s: f32| {
            Duration::try_from_secs_f32(s).with_context(|| format!("invalid --{}", name))
        };
        Ok(Timing {
            countdown: seconds("countdown", self.countdown)?,
            reveal: seconds("reveal", self.reveal)?,
            finale: seconds("finale", self.finale)?,
        })
    }
    fn opponent(&self) -> anyhow::Result<Box<dyn Opponent>> {
        Ok(match (&self.script, self.seed) {
            (Some(script), _) => Box::new(Scripted::try_from(script.as_str())?),
            (None, Some(seed)) => Box::new(Fish::seeded(seed)),
            (None, None) => Box::new(Fish::default()),
        })
    }
    fn detector(&self) -> anyhow::Result<Box<dyn Detector>> {
        let reader: Box<dyn BufRead> = match self.landmarks.as_str() {
            "-" => Box::new(std::io::stdin().lock()),
            path => Box::new(std::io::BufReader::new(
                std::fs::File::open(path).with_context(|| format!("open landmarks {}", path))?,
            )),
        };
        let replay = Replay::new(reader);
        Ok(match self.normalized {
            true => Box::new(replay.normalized(CAMERA_WIDTH, CAMERA_HEIGHT)),
            false => Box::new(replay),
        })
    }
}

fn main() {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    match play(args) {
        Ok(summary) => log::info!("{}", summary),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn play(args: Args) -> anyhow::Result<Summary> {
    let machine = Machine::new(Wall, args.opponent()?).with_timing(args.timing()?);
    let room = Room::new(machine, args.detector()?)
        .assets(Directory::new(args.assets.clone()))
        .renderer(Terminal::default())
        .paced(args.fps);
    // stdin already carries landmarks; the start key then has to ride in the frames
    let room = match args.landmarks.as_str() {
        "-" => room,
        _ => room.controls(Keyboard::spawn()),
    };
    let room = match args.autostart {
        true => room.autostart(),
        false => room,
    };
    let room = match args.keep_running {
        true => room.persistent(),
        false => room,
    };
    let summary = room.run()?;
    println!();
    Ok(summary)
}
