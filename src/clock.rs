use std::thread;
use std::time::{Duration, Instant};
use tracing::trace;

/// Caps the main loop at a fixed number of frames per second.
pub struct Clock {
    frame: Duration,
    last: Instant,
}

impl Clock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    /// Sleeps out the rest of the current frame.
    pub fn tick(&mut self) {
        let busy = self.last.elapsed();
        match self.frame.checked_sub(busy) {
            Some(rest) => thread::sleep(rest),
            None => trace!(?busy, frame = ?self.frame, "frame overran"),
        }
        self.last = Instant::now();
    }
}
