//! Collision detection and resolution between the ball and rectangular
//! obstacles.
//!
//! The test is AABB overlap with strict inequalities; resolution picks the
//! response axis from the smallest penetration depth. Walls only reflect
//! velocity. Paddles reflect, add spin on horizontal impacts, and snap the
//! ball flush to the contacted face.

use crate::types::{Rect, SPIN_FACTOR};
use crate::{Ball, Paddle, Wall};

/// How deep the ball's bounding box reaches past each edge of an obstacle.
#[derive(Debug, Clone, Copy)]
struct Penetration {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Penetration {
    fn min(&self) -> f64 {
        self.left.min(self.right).min(self.top.min(self.bottom))
    }

    /// Response axis. Exact equality is the rule here: a tie between the
    /// horizontal and vertical minima resolves horizontally.
    fn is_horizontal(&self) -> bool {
        let min = self.min();
        min == self.left || min == self.right
    }
}

/// The ball's axis-aligned bounding box, computed once per check.
#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl BoundingBox {
    fn of(ball: &Ball) -> Self {
        Self {
            left: ball.x - ball.radius,
            right: ball.x + ball.radius,
            top: ball.y - ball.radius,
            bottom: ball.y + ball.radius,
        }
    }

    /// Overlap test with strict inequalities: boxes that merely share an
    /// edge do not collide.
    fn penetration(&self, rect: Rect) -> Option<Penetration> {
        let (ox, oy) = (rect.x as f64, rect.y as f64);
        let (ow, oh) = (rect.width as f64, rect.height as f64);

        let overlaps =
            self.right > ox && self.left < ox + ow && self.bottom > oy && self.top < oy + oh;
        if !overlaps {
            return None;
        }

        Some(Penetration {
            left: (self.right - ox).abs(),
            right: ((ox + ow) - self.left).abs(),
            top: (self.bottom - oy).abs(),
            bottom: ((oy + oh) - self.top).abs(),
        })
    }
}

/// Check the ball against every wall, then every paddle, in slice order.
///
/// Only the first overlap is resolved; at most one collision response per
/// call. The ball is the only thing mutated.
pub fn check(ball: &mut Ball, walls: &[Wall], paddles: &[Paddle]) {
    let bbox = BoundingBox::of(ball);

    for wall in walls {
        if let Some(pen) = bbox.penetration(wall.rect()) {
            resolve_wall(ball, pen);
            return;
        }
    }

    for paddle in paddles {
        if let Some(pen) = bbox.penetration(paddle.rect()) {
            resolve_paddle(ball, paddle, pen);
            return;
        }
    }
}

/// Walls reflect one velocity component and leave the position alone.
fn resolve_wall(ball: &mut Ball, pen: Penetration) {
    if pen.is_horizontal() {
        ball.vx = -ball.vx;
    } else {
        ball.vy = -ball.vy;
    }
}

fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, pen: Penetration) {
    let min = pen.min();

    if pen.is_horizontal() {
        ball.vx = -ball.vx;

        // Spin: vertical velocity shifts with the impact offset from the
        // paddle center.
        let center = paddle.y as f64 + paddle.height as f64 / 2.0;
        let distance = ball.y - center;
        ball.vy += distance * SPIN_FACTOR;

        if min == pen.left {
            ball.x = paddle.x as f64 - ball.radius;
        } else {
            ball.x = (paddle.x + paddle.width) as f64 + ball.radius;
        }
    } else {
        ball.vy = -ball.vy;
        if min == pen.top {
            ball.y = paddle.y as f64 - ball.radius;
        } else {
            ball.y = (paddle.y + paddle.height) as f64 + ball.radius;
        }
    }
}
