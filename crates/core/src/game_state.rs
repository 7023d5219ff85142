//! Game state module - one session of walls, paddles, and ball.
//!
//! The session owns the arena layout and applies the fixed tick order:
//! paddle movement, ball movement, collision resolution.

use crate::types::{
    InputSnapshot, Rgb, BALL_RADIUS, BALL_SPAWN_X, BALL_SPAWN_Y, BALL_SPEED_X, BALL_SPEED_Y,
    PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_X, PADDLE_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
    TOP_MARGIN, WALL_INSET, WALL_THICKNESS,
};
use crate::{collision, Ball, Paddle, Wall};

const BALL_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Complete state of one game session.
///
/// Construction lays out the standard arena: four walls boxing in the
/// playfield, the player paddle on the left, and the ball near the
/// bottom-right corner moving down-right.
#[derive(Debug, Clone)]
pub struct GameState {
    walls: [Wall; 4],
    paddles: [Paddle; 1],
    ball: Ball,
}

impl GameState {
    pub fn new() -> Self {
        let left = Wall::new(
            WALL_INSET,
            0,
            WALL_THICKNESS,
            SCREEN_HEIGHT - WALL_THICKNESS,
        );
        let right = Wall::new(
            SCREEN_WIDTH - WALL_INSET - WALL_THICKNESS,
            0,
            WALL_THICKNESS,
            SCREEN_HEIGHT - WALL_THICKNESS,
        );
        let top = Wall::new(0, TOP_MARGIN, SCREEN_WIDTH, WALL_THICKNESS);
        let bottom = Wall::new(0, SCREEN_HEIGHT - WALL_THICKNESS, SCREEN_WIDTH, WALL_THICKNESS);

        Self {
            walls: [left, right, top, bottom],
            paddles: [Paddle::new(
                PADDLE_X,
                PADDLE_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                PADDLE_SPEED,
            )],
            ball: Ball::new(
                BALL_SPAWN_X,
                BALL_SPAWN_Y,
                BALL_RADIUS,
                BALL_COLOR,
                BALL_SPEED_X,
                BALL_SPEED_Y,
            ),
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn paddles(&self) -> &[Paddle] {
        &self.paddles
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Advance the session by one fixed step.
    ///
    /// Held directions are applied independently, up before down, so holding
    /// both cancels out away from the travel bounds. The ball then moves once
    /// by its velocity, and at most one collision is resolved.
    pub fn tick(&mut self, input: InputSnapshot) {
        for paddle in &mut self.paddles {
            if input.up_pressed {
                paddle.move_up();
            }
            if input.down_pressed {
                paddle.move_down(SCREEN_HEIGHT);
            }
        }

        self.ball.update();
        collision::check(&mut self.ball, &self.walls, &self.paddles);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_has_four_walls_boxing_the_playfield() {
        let state = GameState::new();
        let walls = state.walls();

        assert_eq!(walls.len(), 4);
        assert_eq!(walls[0], Wall::new(5, 0, 10, 470));
        assert_eq!(walls[1], Wall::new(625, 0, 10, 470));
        assert_eq!(walls[2], Wall::new(0, 30, 640, 10));
        assert_eq!(walls[3], Wall::new(0, 470, 640, 10));
    }

    #[test]
    fn ball_spawns_near_bottom_right_moving_down_right() {
        let state = GameState::new();
        let ball = state.ball();

        assert_eq!((ball.x, ball.y), (540.0, 450.0));
        assert_eq!((ball.vx, ball.vy), (3.0, 3.0));
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn idle_tick_moves_only_the_ball() {
        let mut state = GameState::new();
        state.tick(InputSnapshot::default());

        assert_eq!(state.paddles()[0].y, PADDLE_Y);
        assert_eq!((state.ball().x, state.ball().y), (543.0, 453.0));
    }

    #[test]
    fn held_directions_move_the_paddle() {
        let mut state = GameState::new();

        state.tick(InputSnapshot::new(true, false));
        assert_eq!(state.paddles()[0].y, PADDLE_Y - PADDLE_SPEED);

        state.tick(InputSnapshot::new(false, true));
        assert_eq!(state.paddles()[0].y, PADDLE_Y);
    }

    #[test]
    fn holding_both_directions_cancels_out() {
        let mut state = GameState::new();
        state.tick(InputSnapshot::new(true, true));
        assert_eq!(state.paddles()[0].y, PADDLE_Y);
    }
}
