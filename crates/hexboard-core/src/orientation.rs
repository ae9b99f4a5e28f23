//! Display orientation of a board and the physical layout parameters it
//! implies.
//!
//! A board can be shown in 8 orientations: 4 clockwise rotations in 90°
//! steps, each with or without a flip that mirrors the rows before rotating.
//! Every orientation is drawn with the same horizontal layout code. Rotations
//! by 90° or 270° additionally exchange the screen axes at the very end.
//!
//! The physical layout depends on more than the orientation. Reversing the
//! columns of a board with an even column count swaps which columns are the
//! lowered ones. Reversing the rows turns the top trim into the bottom trim.
//! Both effects need row offsets to keep the stagger intact. The lookup below
//! spells out every combination.

use crate::hex::CellCoord;
use serde::{Deserialize, Serialize};

/// A rotation (0-3, clockwise quarter turns) plus an optional row flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Orientation {
    rotation: u8,
    flip: bool,
}

impl Orientation {
    /// Rotation 0, not flipped
    pub const IDENTITY: Orientation = Orientation {
        rotation: 0,
        flip: false,
    };

    /// Create an orientation; rotation is taken modulo 4 (negative turns too)
    pub fn new(rotation: i32, flip: bool) -> Self {
        Self {
            rotation: rotation.rem_euclid(4) as u8,
            flip,
        }
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Whether the screen axes are exchanged (rotation 1 or 3)
    pub fn is_vertical(&self) -> bool {
        self.rotation & 1 == 1
    }

    /// The same flip, turned one more quarter clockwise
    pub fn rotated_clockwise(self) -> Self {
        Self::new(self.rotation as i32 + 1, self.flip)
    }

    /// All 8 orientations
    pub fn all() -> impl Iterator<Item = Orientation> {
        (0..4).flat_map(|rotation| [false, true].map(|flip| Orientation::new(rotation, flip)))
    }
}

/// Every input the physical layout depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientationKey {
    pub trim_low: bool,
    pub trim_high: bool,
    pub flip: bool,
    /// Whether the board has an odd number of columns
    pub odd_cols: bool,
    /// Clockwise quarter turns, 0-3
    pub rotation: u8,
}

impl OrientationKey {
    pub fn new(orientation: Orientation, trim_low: bool, trim_high: bool, num_cols: i32) -> Self {
        Self {
            trim_low,
            trim_high,
            flip: orientation.flip(),
            odd_cols: num_cols & 1 == 1,
            rotation: orientation.rotation(),
        }
    }

    /// `trim_low * 2 + trim_high`, the usual compact form of the trim pair
    pub fn trim_index(&self) -> u8 {
        (self.trim_low as u8) * 2 + self.trim_high as u8
    }
}

/// How logical cells are laid out physically for one orientation.
///
/// Physical coordinates are what the horizontal layout code places on
/// screen. Row offsets are keyed by the parity of the *physical* column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhysicalParams {
    pub vertical_orientation: bool,
    pub physical_trim_low: bool,
    pub physical_trim_high: bool,
    pub invert_cols: bool,
    pub invert_rows: bool,
    pub odd_row_offset: i32,
    pub even_row_offset: i32,
}

impl PhysicalParams {
    /// Look up the layout parameters for a key
    pub fn lookup(key: OrientationKey) -> Self {
        // Rotation is clockwise on screen, flip mirrors rows first.
        let (vertical_orientation, invert_cols, invert_rows) = match (key.rotation % 4, key.flip) {
            (0, false) => (false, false, false),
            (0, true) => (false, false, true),
            (1, false) => (true, false, true),
            (1, true) => (true, false, false),
            (2, false) => (false, true, true),
            (2, true) => (false, true, false),
            (_, false) => (true, true, false),
            (_, true) => (true, true, true),
        };

        let (tl, th) = (key.trim_low, key.trim_high);
        let (tl_n, th_n) = (tl as i32, th as i32);
        let (physical_trim_low, physical_trim_high, even_row_offset, odd_row_offset) =
            match (invert_cols, invert_rows, key.odd_cols) {
                // Straight copy, or a mirror that keeps column parity
                (false, false, _) | (true, false, true) => (tl, th, 0, 0),
                // Mirror that swaps column parity
                (true, false, false) => (!tl, !th, 1 - tl_n, -tl_n),
                // Top and bottom exchange, stagger reverses
                (false, true, _) | (true, true, true) => (!th, !tl, 1 - th_n, -th_n),
                // Half turn of an even-width board maps the lattice onto itself
                (true, true, false) => (th, tl, 0, 0),
            };

        Self {
            vertical_orientation,
            physical_trim_low,
            physical_trim_high,
            invert_cols,
            invert_rows,
            odd_row_offset,
            even_row_offset,
        }
    }

    fn row_offset(&self, physical_col: i32) -> i32 {
        if physical_col & 1 == 1 {
            self.odd_row_offset
        } else {
            self.even_row_offset
        }
    }

    /// Map a logical cell to its physical position
    pub fn to_physical(&self, logical: CellCoord, num_cols: i32, num_rows: i32) -> CellCoord {
        let col = if self.invert_cols {
            (num_cols - 1).saturating_sub(logical.col)
        } else {
            logical.col
        };
        let row = if self.invert_rows {
            (num_rows - 1).saturating_sub(logical.row)
        } else {
            logical.row
        };
        CellCoord::new(col, row.saturating_add(self.row_offset(col)))
    }

    /// Map a physical position back to its logical cell. Exact inverse of
    /// [`to_physical`](Self::to_physical) away from the ends of the `i32`
    /// range, where both saturate.
    pub fn to_logical(&self, physical: CellCoord, num_cols: i32, num_rows: i32) -> CellCoord {
        let row = physical.row.saturating_sub(self.row_offset(physical.col));
        let col = if self.invert_cols {
            (num_cols - 1).saturating_sub(physical.col)
        } else {
            physical.col
        };
        let row = if self.invert_rows {
            (num_rows - 1).saturating_sub(row)
        } else {
            row
        };
        CellCoord::new(col, row)
    }
}
