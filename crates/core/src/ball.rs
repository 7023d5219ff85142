//! The ball: float position and velocity, advanced one step per tick.

use crate::types::Rgb;

/// The ball in flight.
///
/// Position and velocity are `f64` so paddle spin can accumulate fractional
/// vertical speed. Collision resolution is the only other writer of these
/// fields; see [`crate::collision::check`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: Rgb,
}

impl Ball {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, vx: f64, vy: f64) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            x,
            y,
            radius,
            vx,
            vy,
            color,
        }
    }

    /// Advance one tick: position moves by the current velocity.
    ///
    /// Called exactly once per tick, before collision checking.
    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_advances_position_by_velocity() {
        let mut ball = Ball::new(540.0, 450.0, 10.0, Rgb::new(255, 255, 255), 3.0, 3.0);
        ball.update();
        assert_eq!(ball.x, 543.0);
        assert_eq!(ball.y, 453.0);
    }

    #[test]
    fn update_follows_negative_velocity() {
        let mut ball = Ball::new(100.0, 100.0, 10.0, Rgb::default(), -2.5, -0.5);
        ball.update();
        assert_eq!(ball.x, 97.5);
        assert_eq!(ball.y, 99.5);
    }
}
