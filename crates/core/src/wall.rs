//! Static rectangular walls.

use crate::types::Rect;

/// An immovable wall. Geometry only; the collision pass reads it, the view
/// draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Wall {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
