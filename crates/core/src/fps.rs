//! Frame counter with an injected millisecond clock.

use crate::types::FPS_WINDOW_MS;

/// Counts simulation frames and republishes the rate once per second.
///
/// The counter is owned by the loop that drives it; time comes in through
/// `tick`, so tests can drive the window without sleeping. `current` reads
/// the last published rate (0 until the first full window elapses).
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start_ms: u64,
    frames: u32,
    fps: u32,
    has_started: bool,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window_start_ms: 0,
            frames: 0,
            fps: 0,
            has_started: false,
        }
    }

    /// Count one frame at `now_ms` and return the current published rate.
    ///
    /// The window opens on the first call; each time a full window elapses
    /// the frame count becomes the published rate and the window restarts.
    pub fn tick(&mut self, now_ms: u64) -> u32 {
        if !self.has_started {
            self.has_started = true;
            self.window_start_ms = now_ms;
        }

        self.frames += 1;
        if now_ms.saturating_sub(self.window_start_ms) >= FPS_WINDOW_MS {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start_ms = now_ms;
        }

        self.fps
    }

    pub fn current(&self) -> u32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
