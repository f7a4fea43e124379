use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// The single user input: start or restart the match.
pub trait Controls {
    /// True once per press, polled every frame.
    fn restart(&mut self) -> bool;
}

impl<K> Controls for Box<K>
where
    K: Controls + ?Sized,
{
    fn restart(&mut self) -> bool {
        (**self).restart()
    }
}

/// Nobody at the keyboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattended;

impl Controls for Unattended {
    fn restart(&mut self) -> bool {
        false
    }
}

/// Restart key typed on stdin followed by Enter.
///
/// Stdin is read on a background thread that only raises a flag; the
/// frame loop consumes the flag, so match state is never touched off
/// the frame thread.
#[derive(Debug)]
pub struct Keyboard {
    pressed: Arc<AtomicBool>,
}

impl Keyboard {
    pub fn spawn() -> Self {
        let pressed = Arc::new(AtomicBool::new(false));
        let flag = pressed.clone();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) if Self::is_restart(&line) => {
                        log::debug!("[keyboard] restart requested");
                        flag.store(true, Ordering::Relaxed);
                    }
                    Ok(_) => continue,
                    Err(e) => {
                        log::warn!("[keyboard] stdin closed: {}", e);
                        break;
                    }
                }
            }
        });
        Self { pressed }
    }
    fn is_restart(line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(&rps_core::RESTART_KEY.to_string())
    }
}

impl Controls for Keyboard {
    fn restart(&mut self) -> bool {
        self.pressed.swap(false, Ordering::Relaxed)
    }
}
