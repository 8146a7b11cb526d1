//! Cosmetic progress indicator for blocking network calls.
//!
//! The spinner owns one terminal line on a background thread; the main
//! flow signals it to stop and joins it before printing anything further,
//! so the two never interleave output. It has no effect on pipeline
//! correctness and carries no backpressure.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{cursor, terminal, QueueableCommand};

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

const FRAME_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            SPINNER_FRAMES_BRAILLE
        } else {
            SPINNER_FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }
}

/// A spinner animating on its own thread until told to stop.
///
/// Dropping the handle also stops and joins the thread, so an early `?`
/// return in the caller still cleans the line up.
pub struct SpinnerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

/// Starts the spinner. The caller must not write to the terminal until
/// [`SpinnerHandle::finish`] (or drop) has returned.
pub fn start(message: impl Into<String>, supports_unicode: bool) -> SpinnerHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    let message = message.into();

    let thread = thread::spawn(move || {
        let mut spinner = Spinner::new(message);
        let mut out = io::stdout();
        while !flag.load(Ordering::Relaxed) {
            let _ = draw_line(&mut out, &spinner.render(supports_unicode));
            spinner.tick();
            thread::sleep(FRAME_INTERVAL);
        }
        let _ = clear_line(&mut out);
    });

    SpinnerHandle {
        stop,
        thread: Some(thread),
    }
}

impl SpinnerHandle {
    /// Signals the thread to stop, waits for it to erase its line, then
    /// returns ownership of the terminal to the caller.
    pub fn finish(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn draw_line(out: &mut impl Write, content: &str) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.write_all(content.as_bytes())?;
    out.flush()
}

fn clear_line(out: &mut impl Write) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Deploying...");
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Deploying...");
        assert!(s.render(false).starts_with('-'));
    }

    #[test]
    fn tick_advances_frame() {
        let mut s = Spinner::new("Deploying...");
        let first = s.render(true);
        s.tick();
        let second = s.render(true);
        assert_ne!(first, second);
    }

    #[test]
    fn finish_joins_the_background_thread() {
        let handle = start("working", false);
        handle.finish();
    }
}
