use crate::types::Outcome;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell states
    pub cells: Vec<bool>,
    pub lit: usize,
    pub cursor: (usize, usize),
    pub help_visible: bool,
    pub outcome: Outcome,
    pub game_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// Whether the board accepts activations
    pub fn playable(&self) -> bool {
        !self.outcome.is_won() && !self.help_visible
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            lit: 0,
            cursor: (0, 0),
            help_visible: false,
            outcome: Outcome::Won,
            game_id: 0,
            seed: 0,
        }
    }
}
