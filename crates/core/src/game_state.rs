//! Game state module - one Lights Out session
//!
//! This module ties the grid to everything around it that is not a rule of the
//! puzzle: the seeded RNG, the keyboard cursor, the how-to-play dialog and the
//! policy for boards that come out already solved.

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::GridError;
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Board parameters for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub lit_probability: f64,
    pub start_policy: StartPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            lit_probability: DEFAULT_LIT_PROBABILITY,
            start_policy: StartPolicy::AcceptInstantWin,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: SessionConfig,
    grid: Grid,
    rng: StdRng,
    seed: u64,
    /// Monotonic game id (increments on new game).
    game_id: u32,
    cursor_row: usize,
    cursor_col: usize,
    help_visible: bool,
}

impl GameState {
    /// Create a session and draw its first board from `seed`
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Self::draw_grid(&config, &mut rng)?;

        Ok(Self {
            cursor_row: config.rows / 2,
            cursor_col: config.cols / 2,
            config,
            grid,
            rng,
            seed,
            game_id: 0,
            help_visible: false,
        })
    }

    fn draw_grid(config: &SessionConfig, rng: &mut StdRng) -> Result<Grid, GridError> {
        let mut grid = Grid::initialize(config.rows, config.cols, config.lit_probability, rng)?;

        // A zero chance can only ever produce a solved board.
        if config.start_policy == StartPolicy::Reroll && config.lit_probability > 0.0 {
            let mut attempts = 0;
            while grid.is_solved() && attempts < MAX_REROLLS {
                attempts += 1;
                debug!("board came out solved, reroll {}/{}", attempts, MAX_REROLLS);
                grid = Grid::initialize(config.rows, config.cols, config.lit_probability, rng)?;
            }
        }

        debug!(
            "new {}x{} board with {} lit cells",
            grid.rows(),
            grid.cols(),
            grid.lit_count()
        );
        Ok(grid)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn outcome(&self) -> Outcome {
        self.grid.outcome()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Whether activations and cursor moves are accepted
    pub fn playable(&self) -> bool {
        !self.help_visible && !self.grid.is_solved()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.lit = self.grid.lit_count();
        out.cursor = self.cursor();
        out.help_visible = self.help_visible;
        out.outcome = self.grid.outcome();
        out.game_id = self.game_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action
    ///
    /// Returns the grid outcome when the action toggled lights, `None` otherwise.
    pub fn apply_action(&mut self, action: GameAction) -> Option<Outcome> {
        match action {
            GameAction::MoveUp => self.move_cursor(-1, 0),
            GameAction::MoveDown => self.move_cursor(1, 0),
            GameAction::MoveLeft => self.move_cursor(0, -1),
            GameAction::MoveRight => self.move_cursor(0, 1),
            GameAction::Activate => {
                let (row, col) = self.cursor();
                self.activate(row, col)
            }
            GameAction::ActivateAt { row, col } => {
                if self.playable() && self.grid.in_bounds(row, col) {
                    self.cursor_row = row;
                    self.cursor_col = col;
                }
                self.activate(row, col)
            }
            GameAction::ToggleHelp => {
                self.help_visible = !self.help_visible;
                None
            }
            GameAction::CloseHelp => {
                self.help_visible = false;
                None
            }
            GameAction::NewGame => {
                let drawn = self.new_game();
                // `config` is private and was accepted by `new`.
                debug_assert!(drawn.is_ok(), "redraw failed: {:?}", drawn);
                None
            }
        }
    }

    /// Activate (row, col) unless the help dialog is open or the board is solved
    pub fn activate(&mut self, row: usize, col: usize) -> Option<Outcome> {
        if !self.playable() {
            return None;
        }

        let outcome = self.grid.activate(row, col);
        if outcome.is_won() {
            info!(
                "solved {}x{} board (game {}, seed {})",
                self.grid.rows(),
                self.grid.cols(),
                self.game_id,
                self.seed
            );
        }
        Some(outcome)
    }

    /// Discard the board and draw the next one from the same RNG stream
    ///
    /// On error the current board, cursor and game id are left untouched.
    pub fn new_game(&mut self) -> Result<(), GridError> {
        self.grid = Self::draw_grid(&self.config, &mut self.rng)?;
        self.game_id = self.game_id.wrapping_add(1);
        self.cursor_row = self.config.rows / 2;
        self.cursor_col = self.config.cols / 2;
        self.help_visible = false;
        Ok(())
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> Option<Outcome> {
        if !self.playable() {
            return None;
        }
        self.cursor_row = self
            .cursor_row
            .saturating_add_signed(d_row)
            .min(self.grid.rows() - 1);
        self.cursor_col = self
            .cursor_col
            .saturating_add_signed(d_col)
            .min(self.grid.cols() - 1);
        None
    }
}
