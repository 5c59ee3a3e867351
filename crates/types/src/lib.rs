//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the application.
//! Everything here is dependency-free so it can be shared by the engine,
//! the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! The classic puzzle is played on a 5x5 board:
//!
//! - **Rows**: 5 (indexed 0-4, top to bottom)
//! - **Cols**: 5 (indexed 0-4, left to right)
//! - **Lit chance**: each cell starts lit with probability 0.25
//!
//! Boards from 1x1 up to `MAX_DIMENSION` x `MAX_DIMENSION` are supported by the
//! game runner. The engine itself only requires both dimensions to be at least 1.
//!
//! # Examples
//!
//! ```
//! use lights_out_types::{Outcome, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(DEFAULT_ROWS, 5);
//! assert_eq!(DEFAULT_COLS, 5);
//!
//! assert!(Outcome::Won.is_won());
//! assert_eq!(Outcome::from_lit_count(3), Outcome::InProgress);
//! ```

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 5;

/// Default board width in cells
pub const DEFAULT_COLS: usize = 5;

/// Default chance that any single cell starts lit
pub const DEFAULT_LIT_PROBABILITY: f64 = 0.25;

/// Largest board dimension accepted by the game runner
pub const MAX_DIMENSION: usize = 20;

/// Number of times a session re-draws an all-unlit starting board before giving up
pub const MAX_REROLLS: u32 = 64;


/// Derived status of a grid.
///
/// - **Won**: every cell is unlit
/// - **InProgress**: at least one cell is lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
}

impl Outcome {
    /// Outcome for a grid with `lit` lit cells
    pub fn from_lit_count(lit: usize) -> Self {
        if lit == 0 {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// What to do when a freshly drawn board is already solved.
///
/// With a low lit chance (including exactly 0) every cell can come out unlit,
/// which is an immediate win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StartPolicy {
    /// Keep the board and report the win right away
    #[default]
    AcceptInstantWin,
    /// Draw again (up to `MAX_REROLLS` times)
    Reroll,
}

/// Game actions that can be applied to a session
///
/// Keyboard and mouse input both end up as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Activate the cell under the cursor
    Activate,
    /// Activate a specific cell (mouse click) and move the cursor there
    ActivateAt { row: usize, col: usize },
    /// Show or hide the how-to-play dialog
    ToggleHelp,
    /// Hide the how-to-play dialog
    CloseHelp,
    /// Discard the board and draw a new one
    NewGame,
}
