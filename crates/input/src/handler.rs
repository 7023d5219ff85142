//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crate::types::{InputSnapshot, PaddleAction};

// In terminals without key-release events, a single tap would read as held
// forever. A short timeout expires stale holds; terminal auto-repeat keeps
// refreshing the window while the key is really down.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which paddle directions are currently held.
///
/// Press and auto-repeat events both feed [`handle_key_press`]; the
/// simulation reads one [`InputSnapshot`] per tick via [`snapshot`]. When the
/// terminal reports real release events (kitty keyboard protocol), construct
/// with `with_release_events(true)` and the timeout fallback is disabled.
///
/// [`handle_key_press`]: PaddleInput::handle_key_press
/// [`snapshot`]: PaddleInput::snapshot
#[derive(Debug, Clone)]
pub struct PaddleInput {
    up_held: bool,
    down_held: bool,
    last_up_ms: u64,
    last_down_ms: u64,
    release_events: bool,
    release_timeout_ms: u64,
}

impl PaddleInput {
    pub fn new() -> Self {
        Self {
            up_held: false,
            down_held: false,
            last_up_ms: 0,
            last_down_ms: 0,
            release_events: false,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust real key-release events instead of the timeout fallback.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u64 {
        self.release_timeout_ms
    }

    pub fn handle_key_press(&mut self, action: PaddleAction, now_ms: u64) {
        match action {
            PaddleAction::MoveUp => {
                self.up_held = true;
                self.last_up_ms = now_ms;
            }
            PaddleAction::MoveDown => {
                self.down_held = true;
                self.last_down_ms = now_ms;
            }
        }
    }

    pub fn handle_key_release(&mut self, action: PaddleAction) {
        match action {
            PaddleAction::MoveUp => self.up_held = false,
            PaddleAction::MoveDown => self.down_held = false,
        }
    }

    /// Read the held state for one tick, expiring stale holds first.
    pub fn snapshot(&mut self, now_ms: u64) -> InputSnapshot {
        if !self.release_events {
            if self.up_held && now_ms.saturating_sub(self.last_up_ms) > self.release_timeout_ms {
                self.up_held = false;
            }
            if self.down_held && now_ms.saturating_sub(self.last_down_ms) > self.release_timeout_ms
            {
                self.down_held = false;
            }
        }

        InputSnapshot::new(self.up_held, self.down_held)
    }

    pub fn reset(&mut self) {
        self.up_held = false;
        self.down_held = false;
        self.last_up_ms = 0;
        self.last_down_ms = 0;
    }
}

impl Default for PaddleInput {
    fn default() -> Self {
        Self::new()
    }
}
