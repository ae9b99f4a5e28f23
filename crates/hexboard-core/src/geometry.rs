//! Static board shape: extent, edge trimming, and existence masks.
//!
//! A board is a `num_cols × num_rows` array of flat-topped hexes. Its jagged
//! top and bottom edges come from two trim flags:
//! - `trim_low` removes row 0 of every even column
//! - `trim_high` removes the last row of every odd column
//!
//! Partial boards (rhombus, star, triangle) carry an explicit mask instead,
//! built once by the generators in [`crate::shapes`].

use crate::grid::Grid;
use crate::hex::CellCoord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a board
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Board needs at least one column and one row, got {cols}x{rows}")]
    EmptyBoard { cols: i32, rows: i32 },

    #[error("Cell height must be positive, got {0}")]
    InvalidCellHeight(i32),

    #[error("Control line length {control} must be between 0 and the cell width {width}")]
    InvalidControlLine { control: i32, width: i32 },

    #[error("Existence mask is {mask_cols}x{mask_rows} but the board is {cols}x{rows}")]
    MaskMismatch {
        mask_cols: usize,
        mask_rows: usize,
        cols: i32,
        rows: i32,
    },

    #[error("Shape side size must be between 1 and 1024, got {0}")]
    InvalidSideSize(i32),

    #[error("Board does not fit in 32-bit pixel coordinates")]
    PixelOverflow,

    #[error("Invalid board config: {0}")]
    InvalidConfig(String),
}

/// The fixed shape of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    num_cols: i32,
    num_rows: i32,
    trim_low: bool,
    trim_high: bool,
    /// Overrides the trim rule when present
    mask: Option<Grid<bool>>,
}

impl BoardGeometry {
    /// Create a trimmed rectangular board
    pub fn new(
        num_cols: i32,
        num_rows: i32,
        trim_low: bool,
        trim_high: bool,
    ) -> Result<Self, BoardError> {
        if num_cols <= 0 || num_rows <= 0 {
            return Err(BoardError::EmptyBoard {
                cols: num_cols,
                rows: num_rows,
            });
        }
        Ok(Self {
            num_cols,
            num_rows,
            trim_low,
            trim_high,
            mask: None,
        })
    }

    /// Attach an existence mask. The mask must cover exactly the board.
    pub fn with_mask(mut self, mask: Grid<bool>) -> Result<Self, BoardError> {
        if mask.cols() != self.num_cols as usize || mask.rows() != self.num_rows as usize {
            return Err(BoardError::MaskMismatch {
                mask_cols: mask.cols(),
                mask_rows: mask.rows(),
                cols: self.num_cols,
                rows: self.num_rows,
            });
        }
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn num_cols(&self) -> i32 {
        self.num_cols
    }

    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    pub fn trim_low(&self) -> bool {
        self.trim_low
    }

    pub fn trim_high(&self) -> bool {
        self.trim_high
    }

    pub fn mask(&self) -> Option<&Grid<bool>> {
        self.mask.as_ref()
    }

    /// Whether `(col, row)` lies inside the rectangular envelope
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        (0..self.num_cols).contains(&col) && (0..self.num_rows).contains(&row)
    }

    /// Whether the cell at `(col, row)` is part of the board.
    ///
    /// Never fails: anything outside the envelope is simply absent.
    pub fn exists_on_board(&self, col: i32, row: i32) -> bool {
        if !self.in_bounds(col, row) {
            return false;
        }
        if let Some(mask) = &self.mask {
            return mask.get(col, row).copied().unwrap_or(false);
        }
        let odd_col = col & 1 == 1;
        let trimmed_low = self.trim_low && !odd_col && row == 0;
        let trimmed_high = self.trim_high && odd_col && row == self.num_rows - 1;
        !(trimmed_low || trimmed_high)
    }

    /// Every existing cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.num_cols)
            .flat_map(move |col| (0..self.num_rows).map(move |row| CellCoord::new(col, row)))
            .filter(move |c| self.exists_on_board(c.col, c.row))
    }

    /// Number of existing cells
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}
