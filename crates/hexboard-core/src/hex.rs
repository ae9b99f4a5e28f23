//! Coordinate value types shared by every layer of the board engine.
//!
//! This module provides:
//! - `CellCoord`: a `(col, row)` cell address, logical or physical
//! - `Point` and `Dimension`: pixel-space positions and extents
//! - `HexPolygon`: the six outline vertices of one hex on screen
//!
//! Boards use offset coordinates with flat-topped hexes: columns run left to
//! right, and every odd column sits half a cell lower than its even
//! neighbours.

use serde::{Deserialize, Serialize};

/// Address of a single cell on the board.
///
/// The same type is used for logical cells (what games reason about) and
/// physical cells (what the layout code places on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CellCoord {
    /// Column, increasing to the right
    pub col: i32,
    /// Row, increasing downwards
    pub row: i32,
}

impl CellCoord {
    /// Sentinel used where a plain coordinate has to stand for "no cell"
    pub const OFF_BOARD: CellCoord = CellCoord::new(-1, -1);

    /// Create a new cell coordinate
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Whether this cell is in an odd (lowered) column
    pub const fn is_odd_col(&self) -> bool {
        self.col & 1 == 1
    }

    /// The six neighbouring cells in clockwise order starting from North.
    ///
    /// Neighbours may fall outside the board; callers filter with
    /// `exists_on_board`.
    pub fn neighbors(&self) -> [CellCoord; 6] {
        let (col, row) = (self.col, self.row);
        let shift = col & 1;
        [
            CellCoord::new(col, row - 1),             // North
            CellCoord::new(col + 1, row - 1 + shift), // NorthEast
            CellCoord::new(col + 1, row + shift),     // SouthEast
            CellCoord::new(col, row + 1),             // South
            CellCoord::new(col - 1, row + shift),     // SouthWest
            CellCoord::new(col - 1, row - 1 + shift), // NorthWest
        ]
    }

    /// Distance to another cell (in hex steps)
    pub fn distance_to(&self, other: &CellCoord) -> u32 {
        let (ax, ay, az) = self.cube();
        let (bx, by, bz) = other.cube();
        let dx = (ax - bx).abs();
        let dy = (ay - by).abs();
        let dz = (az - bz).abs();
        dx.max(dy).max(dz) as u32
    }

    /// Cube coordinates for this offset cell (x + y + z = 0)
    fn cube(&self) -> (i32, i32, i32) {
        let x = self.col;
        let z = self.row - (self.col - (self.col & 1)) / 2;
        (x, -x - z, z)
    }
}

/// A pixel position on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`, saturating at the `i32` range
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// This point with its axes exchanged
    pub const fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// A pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// This extent with width and height exchanged
    pub const fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Outline of one hex, positioned on screen.
///
/// Each call to `HexBoard::hex_polygon` builds a fresh value, so callers can
/// keep or mutate it without affecting anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexPolygon {
    points: [Point; 6],
}

impl HexPolygon {
    pub const fn new(points: [Point; 6]) -> Self {
        Self { points }
    }

    /// The vertices, clockwise starting at the left end of the top control line
    pub fn points(&self) -> &[Point; 6] {
        &self.points
    }

    /// The same outline moved by `(dx, dy)`
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.points.map(|p| p.translate(dx, dy)))
    }

    /// Smallest axis-aligned box containing the outline, as `(top_left, size)`
    pub fn bounds(&self) -> (Point, Dimension) {
        let min_x = self.points.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = self.points.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = self.points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = self.points.iter().map(|p| p.y).max().unwrap_or(0);
        (
            Point::new(min_x, min_y),
            Dimension::new(max_x - min_x, max_y - min_y),
        )
    }
}
