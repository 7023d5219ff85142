//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Drive circle/rectangle drawing through a half-block pixel canvas,
//!   keeping precise control over the playfield's aspect ratio

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod pixel;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{u32_width, Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use menu_view::MenuView;
pub use pixel::PixelCanvas;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
