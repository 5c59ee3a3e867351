//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the board, winner banner and help dialog from a plain snapshot
//! - Map mouse positions back onto board cells with the same layout

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lights_out_core as core;
pub use lights_out_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, HELP_LINES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
