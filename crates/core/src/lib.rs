//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong simulation: entities, collision resolution,
//! and the per-tick session update. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: a session replayed with the same inputs follows the
//!   same trajectory, tick for tick
//! - **Testable**: every rule is exercised by unit tests on plain values
//! - **Portable**: runs the same in a terminal frontend or headless
//!
//! # Module Structure
//!
//! - [`ball`]: the ball with float position/velocity and its per-tick move
//! - [`paddle`]: the player paddle with clamped vertical movement
//! - [`wall`]: static rectangular obstacles
//! - [`collision`]: AABB overlap tests and penetration-depth resolution
//! - [`game_state`]: one session (walls, paddles, ball) and its tick order
//! - [`fps`]: frame counter with an injected millisecond clock
//!
//! # Tick Order
//!
//! [`GameState::tick`] applies exactly one fixed step per call:
//!
//! 1. Move the paddle for each held direction (up before down)
//! 2. Advance the ball by its velocity
//! 3. Resolve at most one collision (walls checked before paddles)
//!
//! There is no interpolation; the loop calls `tick` at a fixed 16ms cadence
//! and renders whatever state results.
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::InputSnapshot;
//!
//! let mut game = GameState::new();
//!
//! // Hold the up key for one tick.
//! game.tick(InputSnapshot::new(true, false));
//!
//! assert_eq!(game.paddles()[0].y, 45);
//! ```

pub mod ball;
pub mod collision;
pub mod fps;
pub mod game_state;
pub mod paddle;
pub mod wall;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use fps::FpsCounter;
pub use game_state::GameState;
pub use paddle::Paddle;
pub use wall::Wall;
