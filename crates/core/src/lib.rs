//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules and session state.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can be driven by any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: rows x cols lights with the flip rule and win check
//! - [`game_state`]: a session - seeded RNG, cursor, help dialog, new game
//! - [`snapshot`]: plain copy of a session for renderers
//! - [`error`]: grid construction errors
//!
//! # Game Rules
//!
//! - Each cell starts lit independently with the configured chance (default 25%)
//! - Activating a cell toggles it and the four orthogonal neighbours
//! - Neighbours that would fall off the board are skipped
//! - The puzzle is solved when every light is off
//!
//! # Example
//!
//! ```
//! use lights_out_core::{activate, Grid, Outcome};
//!
//! let mut grid = Grid::unlit(3, 3).unwrap();
//!
//! // Light the plus shape around the centre
//! assert_eq!(activate(&mut grid, 1, 1), Outcome::InProgress);
//! assert_eq!(grid.lit_count(), 5);
//!
//! // Activating again turns it back off
//! assert_eq!(activate(&mut grid, 1, 1), Outcome::Won);
//! ```
//!
//! Seeded sessions:
//!
//! ```
//! use lights_out_core::{GameState, SessionConfig};
//! use lights_out_core::types::GameAction;
//!
//! let mut game = GameState::new(SessionConfig::default(), 12345).unwrap();
//! let again = GameState::new(SessionConfig::default(), 12345).unwrap();
//! assert_eq!(game.grid(), again.grid());
//!
//! game.apply_action(GameAction::Activate);
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod snapshot;

pub use lights_out_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use game_state::{GameState, SessionConfig};
pub use grid::{activate, initialize, Grid};
pub use snapshot::GameSnapshot;
pub use types::Outcome;
