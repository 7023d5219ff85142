//! The player paddle and its clamped vertical movement.

use crate::types::{Rect, TOP_MARGIN};

/// A player paddle.
///
/// Geometry is integer, matching the wall grid. Movement clamps so the paddle
/// always satisfies `TOP_MARGIN <= y` and `y + height <= screen_height`, even
/// when the remaining distance to the bound is smaller than `speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Move up by `speed`, clamped at [`TOP_MARGIN`].
    pub fn move_up(&mut self) {
        self.y = (self.y - self.speed).max(TOP_MARGIN);
    }

    /// Move down by `speed`, clamped so the paddle stays on screen.
    pub fn move_down(&mut self, screen_height: i32) {
        self.y = (self.y + self.speed).min(screen_height - self.height);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
