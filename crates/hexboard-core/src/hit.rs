//! Pixel → cell hit testing.
//!
//! Points are classified against super cells: the bounding box of one even
//! column hex plus the flat middle of its right-hand neighbour. Inside the
//! left part, the four slanted edges of the even hex split the box into five
//! regions:
//!
//! ```text
//!   +--/--------\--+---------+
//!   | / center   \ |  upper  |
//!   |/            \|  right  |
//!   |\            /|---------|
//!   | \          / |  lower  |
//!   +--\--------/--+  right  |
//! ```
//!
//! The slanted edges are compared with integer cross-multiplication, so no
//! floating point is involved.

use crate::board::HexBoard;
use crate::hex::CellCoord;

/// Pixels between the fill and the outline stroke, which is drawn one pixel
/// right of and below the hex area.
const OUTLINE_CORRECTION: i32 = 1;

impl HexBoard {
    /// The logical cell under the screen point `(screen_x, screen_y)`.
    ///
    /// Returns `None` for points that land outside the board or on a cell
    /// that doesn't exist.
    pub fn board_coords(&self, screen_x: i32, screen_y: i32) -> Option<CellCoord> {
        let inset = self.margins.inset;
        let x = screen_x.checked_sub(inset.x)?.checked_sub(OUTLINE_CORRECTION)?;
        let y = screen_y.checked_sub(inset.y)?.checked_sub(OUTLINE_CORRECTION)?;
        let (x, y) = if self.params.vertical_orientation {
            (y, x)
        } else {
            (x, y)
        };
        if x < 0 || y < 0 {
            return None;
        }
        // Nothing past the hex array plus one cell can be hit. Board
        // construction keeps `classify` in range up to this bound.
        let array = self.hex_array_dim();
        if x >= array.width + self.metrics.super_width || y >= array.height + self.metrics.height {
            return None;
        }

        let physical = self.classify(x, y);
        let logical = self.to_logical(physical);
        self.exists_on_board(logical.col, logical.row)
            .then_some(logical)
    }

    /// Like [`board_coords`](Self::board_coords), but reports misses as
    /// [`CellCoord::OFF_BOARD`].
    pub fn board_coords_or_off_board(&self, screen_x: i32, screen_y: i32) -> CellCoord {
        self.board_coords(screen_x, screen_y)
            .unwrap_or(CellCoord::OFF_BOARD)
    }

    /// Physical cell containing the horizontal-frame point `(x, y)`.
    /// Both coordinates must be non-negative.
    fn classify(&self, x: i32, y: i32) -> CellCoord {
        let m = &self.metrics;

        // With the low edge trimmed, even columns start half a row up
        let y = if self.params.physical_trim_low {
            y + m.half_height
        } else {
            y
        };

        let col = (x / m.super_width) * 2;
        let row = y / m.height;
        let x_in = x % m.super_width;
        let y_in = y % m.height;

        if x_in >= m.width {
            // Flat middle of the odd column to the right
            return if y_in < m.half_height {
                CellCoord::new(col + 1, row - 1)
            } else {
                CellCoord::new(col + 1, row)
            };
        }

        let f1 = m.bound_inset * y_in;
        let f2 = m.half_height * x_in;
        if f1 + f2 < m.i_hh {
            CellCoord::new(col - 1, row - 1)
        } else if f1 - f2 > m.i_hh {
            CellCoord::new(col - 1, row)
        } else if f1 - f2 < m.i_hh - m.w_hh {
            CellCoord::new(col + 1, row - 1)
        } else if f1 + f2 > m.i_hh + m.w_hh {
            CellCoord::new(col + 1, row)
        } else {
            CellCoord::new(col, row)
        }
    }
}
