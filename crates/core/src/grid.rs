//! Grid module - the Lights Out board and its flip rule
//!
//! The grid is a `rows x cols` matrix of lights where each cell is either lit
//! (`true`) or unlit (`false`). Uses a flat row-major vector plus a live count of
//! lit cells so the win check is O(1) after every activation.
//! Coordinates: (row, col) where row ranges 0..rows (top to bottom), col ranges
//! 0..cols (left to right).
//!
//! Activating a cell toggles it and its four orthogonal neighbours. Targets that
//! fall off the edge of the grid are skipped; that is not an error.

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::error::GridError;
use crate::types::Outcome;

/// The game grid - `rows x cols` lights using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<bool>,
    /// Number of `true` entries in `cells`
    lit: usize,
}

impl Grid {
    /// Create a grid where each cell is independently lit with probability
    /// `lit_probability`, sampled from `rng`.
    ///
    /// Fails with [`GridError::InvalidDimension`] when either dimension is 0 and
    /// with [`GridError::InvalidProbability`] when the probability is outside
    /// `[0, 1]` (NaN included). Out-of-range probabilities are rejected, not
    /// clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lights_out_core::Grid;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let grid = Grid::initialize(3, 4, 1.0, &mut rng).unwrap();
    /// assert_eq!(grid.lit_count(), 12);
    /// ```
    pub fn initialize<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        lit_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        if !(0.0..=1.0).contains(&lit_probability) {
            return Err(GridError::InvalidProbability {
                value: lit_probability,
            });
        }

        let cells: Vec<bool> = (0..len).map(|_| rng.gen_bool(lit_probability)).collect();
        let lit = cells.iter().filter(|&&c| c).count();
        Ok(Self {
            rows,
            cols,
            cells,
            lit,
        })
    }

    /// Create a grid with every cell unlit
    pub fn unlit(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
            lit: 0,
        })
    }

    /// Create a grid from explicit row data (stored patterns, tests).
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        Self::checked_len(nrows, ncols)?;
        if let Some(bad) = rows.iter().find(|row| row.len() != ncols) {
            return Err(GridError::InvalidDimension {
                rows: nrows,
                cols: bad.len(),
            });
        }

        let cells: Vec<bool> = rows.into_iter().flatten().collect();
        let lit = cells.iter().filter(|&&c| c).count();
        Ok(Self {
            rows: nrows,
            cols: ncols,
            cells,
            lit,
        })
    }

    fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(GridError::InvalidDimension { rows, cols })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether (row, col) is lit; out-of-bounds cells count as unlit
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some()
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.lit
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// In-bounds cells an activation at (row, col) would toggle.
    ///
    /// Order: centre, left, right, up, down. Off-grid coordinates are dropped,
    /// including the centre itself, so at most 5 and possibly 0 entries.
    pub fn flip_targets(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 5> {
        let candidates = [
            Some((row, col)),
            col.checked_sub(1).map(|c| (row, c)),
            col.checked_add(1).map(|c| (row, c)),
            row.checked_sub(1).map(|r| (r, col)),
            row.checked_add(1).map(|r| (r, col)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|&(r, c)| self.in_bounds(r, c))
            .collect()
    }

    /// Toggle (row, col) and its orthogonal neighbours, then report the outcome.
    ///
    /// Activating the same cell twice restores the previous grid.
    pub fn activate(&mut self, row: usize, col: usize) -> Outcome {
        for (r, c) in self.flip_targets(row, col) {
            let idx = r * self.cols + c;
            self.toggle_index(idx);
        }
        self.outcome()
    }

    #[inline(always)]
    fn toggle_index(&mut self, idx: usize) {
        let cell = &mut self.cells[idx];
        *cell = !*cell;
        if *cell {
            self.lit += 1;
        } else {
            self.lit -= 1;
        }
    }

    /// Outcome derived from the live lit count
    pub fn outcome(&self) -> Outcome {
        Outcome::from_lit_count(self.lit)
    }

    /// Outcome from a full scan of the cells.
    ///
    /// Always agrees with [`Grid::outcome`].
    pub fn scan_outcome(&self) -> Outcome {
        if self.cells.iter().any(|&c| c) {
            Outcome::InProgress
        } else {
            Outcome::Won
        }
    }

    pub fn is_solved(&self) -> bool {
        self.lit == 0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &lit) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if lit { 'O' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// Build a randomized grid. See [`Grid::initialize`].
pub fn initialize<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    lit_probability: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    Grid::initialize(rows, cols, lit_probability, rng)
}

/// Activate (row, col) on `grid`. See [`Grid::activate`].
pub fn activate(grid: &mut Grid, row: usize, col: usize) -> Outcome {
    grid.activate(row, col)
}
