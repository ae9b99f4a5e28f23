//! Board configuration and the pixel metrics derived from it.
//!
//! A hex is described by its bounding box and its control line (the flat top
//! and bottom edge). For a box of width `w` and a control line `c`, the two
//! slanted sides each take `(w - c) / 2` pixels horizontally:
//!
//! ```text
//!       ________          <- control line
//!      /        \
//!     /          \        <- bound inset on either side
//!     \          /
//!      \________/
//! ```

use crate::board::HexBoard;
use crate::geometry::{BoardError, BoardGeometry};
use crate::hex::Point;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Size of a single hex in the horizontal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexCellSize {
    /// Bounding box width
    pub width: i32,
    /// Bounding box height
    pub height: i32,
    /// Length of the flat top/bottom edge
    pub control_line_length: i32,
}

impl HexCellSize {
    pub const fn new(width: i32, height: i32, control_line_length: i32) -> Self {
        Self {
            width,
            height,
            control_line_length,
        }
    }
}

/// Pixel margins around the hex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsetOutset {
    /// Space before the hexes (top-left)
    pub inset: Point,
    /// Space after the hexes (bottom-right)
    pub outset: Point,
}

impl InsetOutset {
    pub const fn new(inset: Point, outset: Point) -> Self {
        Self { inset, outset }
    }
}

impl Default for InsetOutset {
    /// No inset, and one pixel of outset so the outline stroke fits
    fn default() -> Self {
        Self::new(Point::new(0, 0), Point::new(1, 1))
    }
}

/// Everything needed to build a rectangular [`HexBoard`](crate::HexBoard).
///
/// Can be loaded from JSON; trims and margins are optional there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexBoardConfig {
    pub num_cols: i32,
    pub num_rows: i32,
    pub cell: HexCellSize,
    #[serde(default)]
    pub trim_low: bool,
    #[serde(default)]
    pub trim_high: bool,
    #[serde(default)]
    pub margins: InsetOutset,
}

impl HexBoardConfig {
    /// Untrimmed board with default margins
    pub fn new(num_cols: i32, num_rows: i32, cell: HexCellSize) -> Self {
        Self {
            num_cols,
            num_rows,
            cell,
            trim_low: false,
            trim_high: false,
            margins: InsetOutset::default(),
        }
    }

    pub fn with_trim(mut self, trim_low: bool, trim_high: bool) -> Self {
        self.trim_low = trim_low;
        self.trim_high = trim_high;
        self
    }

    pub fn with_margins(mut self, margins: InsetOutset) -> Self {
        self.margins = margins;
        self
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every construction constraint, including the pixel extent
    pub fn validate(&self) -> Result<(), BoardError> {
        HexBoard::new(*self)?;
        Ok(())
    }

    pub(crate) fn geometry(&self) -> Result<BoardGeometry, BoardError> {
        BoardGeometry::new(self.num_cols, self.num_rows, self.trim_low, self.trim_high)
    }
}

/// Pixel quantities derived once from a [`HexCellSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMetrics {
    pub width: i32,
    pub height: i32,
    pub control_line_length: i32,
    /// Horizontal run of each slanted side
    pub bound_inset: i32,
    /// A full hex plus the control line of its right-hand neighbour
    pub super_width: i32,
    pub half_width: i32,
    pub half_height: i32,
    /// `bound_inset * half_height`
    pub i_hh: i32,
    /// `width * half_height`
    pub w_hh: i32,
}

impl CellMetrics {
    pub fn new(cell: HexCellSize) -> Result<Self, BoardError> {
        let HexCellSize {
            width,
            height,
            control_line_length,
        } = cell;

        if height <= 0 {
            warn!(height, "rejected hex cell size");
            return Err(BoardError::InvalidCellHeight(height));
        }
        if control_line_length <= 0 || control_line_length >= width {
            warn!(width, control_line_length, "rejected hex cell size");
            return Err(BoardError::InvalidControlLine {
                control: control_line_length,
                width,
            });
        }

        // Hit testing multiplies offsets inside a super cell by cell sizes;
        // every such product stays below 2 * super_width * height.
        let super_width = width
            .checked_add(control_line_length)
            .filter(|sw| sw.checked_mul(height).and_then(|a| a.checked_mul(2)).is_some())
            .ok_or_else(|| {
                warn!(width, height, control_line_length, "hex cell too large");
                BoardError::PixelOverflow
            })?;

        let bound_inset = (width - control_line_length) / 2;
        let half_height = height / 2;
        Ok(Self {
            width,
            height,
            control_line_length,
            bound_inset,
            super_width,
            half_width: width / 2,
            half_height,
            i_hh: bound_inset * half_height,
            w_hh: width * half_height,
        })
    }

    /// Horizontal distance between neighbouring columns
    pub fn column_step(&self) -> i32 {
        self.control_line_length + self.bound_inset
    }

    /// Pixel offset of `halves` half-cell heights.
    ///
    /// The layout rounds half pixels up: `(height * halves + 1) / 2`,
    /// truncated toward zero. Negative counts (cells above a trimmed edge)
    /// therefore move toward zero rather than away from it. Saturates at the
    /// ends of the `i32` range.
    pub fn half_rows_to_pixels(&self, halves: i32) -> i32 {
        // i32 division truncates toward zero, never floors
        self.height.saturating_mul(halves).saturating_add(1) / 2
    }
}
