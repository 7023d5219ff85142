//! TUI Pong (workspace facade crate).
//!
//! This package keeps the `tui_pong::{core,term,input,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
