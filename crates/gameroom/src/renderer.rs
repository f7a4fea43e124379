use super::*;
use colored::Colorize;
use rps_gameplay::Hud;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Draws one [`Scene`] per frame.
pub trait Renderer {
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()>;
}

impl<R> Renderer for Box<R>
where
    R: Renderer + ?Sized,
{
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()> {
        (**self).render(scene)
    }
}

/// Single status line on stdout, redrawn only when its content changes.
#[derive(Debug, Default)]
pub struct Terminal {
    last: Option<String>,
}

impl Terminal {
    fn line(scene: &Scene<'_>) -> String {
        let hud = &scene.hud;
        let mut line = format!(
            "AI {}  |  {} Player",
            hud.ai.to_string().white().bold(),
            hud.player.to_string().white().bold(),
        );
        if let Some(timer) = hud.timer {
            line.push_str(&format!("  |  {}", timer.to_string().magenta().bold()));
        }
        if let Some(sign) = hud.reveal {
            match scene.sprite {
                Some(_) => line.push_str(&format!("  |  AI: {}", sign.to_string().cyan())),
                None => line.push_str(&format!("  |  AI: {} {}", sign, "(no image)".yellow())),
            }
        }
        if let Some(winner) = hud.winner {
            line.push_str(&format!("  |  {}", winner.to_string().green().bold()));
        }
        if hud.phase.is_idle() {
            line.push_str(&format!("  |  press '{}' to start", rps_core::RESTART_KEY));
        }
        if scene.hands == 0 {
            line.push_str(&format!("  |  {}", "no hand".dimmed()));
        }
        if let Some(fps) = scene.fps {
            line.push_str(&format!("  |  {:.0} fps", fps));
        }
        line
    }
}

impl Renderer for Terminal {
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()> {
        let line = Self::line(scene);
        if self.last.as_deref() == Some(line.as_str()) {
            return Ok(());
        }
        let ref mut stdout = std::io::stdout().lock();
        write!(stdout, "\r\x1b[2K{}", line)?;
        stdout.flush()?;
        self.last = Some(line);
        Ok(())
    }
}

/// One recorded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub hud: Hud,
    pub sprite: bool,
    pub hands: usize,
    /// Whole frames per second, as displayed.
    pub fps: Option<u32>,
}

/// Keeps every frame in memory. Clones share the same recording, so a
/// handle kept outside the room can inspect what the room rendered.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Rc<RefCell<Vec<Shot>>>);

impl Recorder {
    pub fn shots(&self) -> Vec<Shot> {
        self.0.borrow().clone()
    }
    pub fn last(&self) -> Option<Shot> {
        self.0.borrow().last().copied()
    }
}

impl Renderer for Recorder {
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()> {
        self.0.borrow_mut().push(Shot {
            hud: scene.hud,
            sprite: scene.sprite.is_some(),
            hands: scene.hands,
            fps: scene.fps.map(|fps| fps.round() as u32),
        });
        Ok(())
    }
}
