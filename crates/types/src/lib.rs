//! Shared types module - pure data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input handling).
//!
//! # Playfield Dimensions
//!
//! The simulation runs in a fixed logical coordinate space; the terminal view
//! scales it to whatever viewport is available:
//!
//! - **Width**: 640 logical pixels
//! - **Height**: 480 logical pixels
//! - **Origin**: top-left, y grows downward
//!
//! # Layout Constants
//!
//! The standard single-player arena:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TOP_MARGIN` | 30 | y of the top wall; also the paddle's upper travel bound |
//! | `WALL_THICKNESS` | 10 | Thickness of every wall |
//! | `WALL_INSET` | 5 | Gap between a side wall and the screen edge |
//! | `PADDLE_X`, `PADDLE_Y` | 20, 50 | Paddle spawn position |
//! | `PADDLE_WIDTH`, `PADDLE_HEIGHT` | 10, 100 | Paddle size |
//! | `PADDLE_SPEED` | 5 | Paddle travel per tick while a key is held |
//! | `BALL_RADIUS` | 10.0 | Ball radius |
//! | `BALL_SPAWN_X`, `BALL_SPAWN_Y` | 540.0, 450.0 | Ball spawn position |
//! | `BALL_SPEED_X`, `BALL_SPEED_Y` | 3.0, 3.0 | Ball spawn velocity |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TARGET_FPS` | 60 | Simulation rate the loop paces toward |
//! | `FPS_WINDOW_MS` | 1000 | FPS counter republish window |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{InputSnapshot, Rect, SCREEN_WIDTH, SCREEN_HEIGHT};
//!
//! // Logical playfield size
//! assert_eq!(SCREEN_WIDTH, 640);
//! assert_eq!(SCREEN_HEIGHT, 480);
//!
//! // Rectangles expose their edges
//! let r = Rect::new(20, 50, 10, 100);
//! assert_eq!(r.right(), 30);
//! assert_eq!(r.bottom(), 150);
//!
//! // Input snapshots are plain held-key state
//! let input = InputSnapshot::default();
//! assert!(!input.up_pressed);
//! ```

/// Logical playfield width in pixels
pub const SCREEN_WIDTH: i32 = 640;

/// Logical playfield height in pixels
pub const SCREEN_HEIGHT: i32 = 480;

/// y of the top wall; the paddle never travels above this
pub const TOP_MARGIN: i32 = 30;

/// Thickness of every wall
pub const WALL_THICKNESS: i32 = 10;

/// Gap between a side wall and the screen edge
pub const WALL_INSET: i32 = 5;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Simulation rate the main loop paces toward
pub const TARGET_FPS: u32 = 60;

/// FPS counter republish window in milliseconds
pub const FPS_WINDOW_MS: u64 = 1000;

/// Paddle spawn x
pub const PADDLE_X: i32 = 20;

/// Paddle spawn y
pub const PADDLE_Y: i32 = 50;

/// Paddle width
pub const PADDLE_WIDTH: i32 = 10;

/// Paddle height
pub const PADDLE_HEIGHT: i32 = 100;

/// Paddle travel per tick while a movement key is held
pub const PADDLE_SPEED: i32 = 5;

/// Ball radius
pub const BALL_RADIUS: f64 = 10.0;

/// Ball spawn x (100 logical pixels in from the right edge)
pub const BALL_SPAWN_X: f64 = (SCREEN_WIDTH - 100) as f64;

/// Ball spawn y (30 logical pixels up from the bottom edge)
pub const BALL_SPAWN_Y: f64 = (SCREEN_HEIGHT - 30) as f64;

/// Ball spawn horizontal velocity (pixels per tick)
pub const BALL_SPEED_X: f64 = 3.0;

/// Ball spawn vertical velocity (pixels per tick)
pub const BALL_SPEED_Y: f64 = 3.0;

/// Vertical velocity gained per pixel of offset from the paddle center
pub const SPIN_FACTOR: f64 = 0.05;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in logical playfield coordinates.
///
/// `x`/`y` is the top-left corner; y grows downward, so `bottom() > top()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Paddle movement actions driven by held keys.
///
/// Both actions can be active in the same tick; the session applies up
/// before down, so simultaneous holds cancel out away from the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleAction {
    /// Move the paddle up by its speed (clamped at `TOP_MARGIN`)
    MoveUp,
    /// Move the paddle down by its speed (clamped at the screen bottom)
    MoveDown,
}

/// Held-key state consumed by the simulation once per tick.
///
/// This is the single value the input layer hands to the game loop; the
/// session never inspects raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub up_pressed: bool,
    pub down_pressed: bool,
}

impl InputSnapshot {
    pub const fn new(up_pressed: bool, down_pressed: bool) -> Self {
        Self {
            up_pressed,
            down_pressed,
        }
    }
}
