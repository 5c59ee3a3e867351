//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and extracts click positions from
//! mouse events. Turning a click position into a board cell needs the board
//! layout, which lives with the renderer (`GameView::cell_at`).

pub mod map;

pub use lights_out_types as types;

pub use map::{click_position, handle_key_event, should_quit};
