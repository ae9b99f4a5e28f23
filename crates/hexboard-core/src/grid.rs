//! Column-major grid storage for per-cell board data.
//!
//! Existence masks for partial boards are `Grid<bool>`. All accessors take
//! signed `(col, row)` pairs and are bounds checked, so callers can probe
//! neighbours and off-board positions without extra guards.

use crate::hex::CellCoord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size `cols × rows` grid, stored column by column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(cols: usize, rows: usize, fill: T) -> Self {
        Self {
            cols,
            rows,
            cells: vec![fill; cols * rows],
        }
    }
}

impl<T> Grid<T> {
    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether `(col, row)` lies inside the grid
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_some()
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(col * self.rows + row)
    }

    /// Get the value at `(col, row)`, if inside the grid
    pub fn get(&self, col: i32, row: i32) -> Option<&T> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the value at `(col, row)`, if inside the grid
    pub fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut T> {
        self.index(col, row).map(move |i| &mut self.cells[i])
    }

    /// Store `value` at `(col, row)`. Returns false (and drops the value)
    /// when the position is outside the grid.
    pub fn set(&mut self, col: i32, row: i32, value: T) -> bool {
        match self.get_mut(col, row) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All cells with their coordinates, column by column
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> + '_ {
        let rows = self.rows;
        self.cells.iter().enumerate().map(move |(i, value)| {
            let coord = CellCoord::new((i / rows) as i32, (i % rows) as i32);
            (coord, value)
        })
    }
}

impl Grid<bool> {
    /// Number of cells set to true
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }
}

/// Renders a mask row by row, `#` for present cells and `.` for absent ones.
impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let set = self.cells[col * self.rows + row];
                f.write_str(if set { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
