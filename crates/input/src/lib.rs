//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::PaddleAction`] values and
//! tracks held-key state per tick, including terminals that never emit
//! key-release events.

pub mod handler;
pub mod map;

pub use tui_pong_types as types;

pub use handler::PaddleInput;
pub use map::{handle_key_event, should_quit, starts_game};
