//! The hex board component: shape, cell metrics, margins and orientation,
//! plus the forward mapping from logical cells to screen positions.
//!
//! Layout works in the horizontal (flat-topped) frame. Columns come in pairs
//! called super cells, each `super_width` pixels wide:
//!
//! ```text
//!   even column        odd column (half a row lower)
//!    ________
//!   /        \________
//!   \        /        \
//!    \______/          \
//! ```
//!
//! Vertical orientations reuse the same arithmetic and exchange the axes as
//! the last step, just before the inset is applied.

use crate::config::{CellMetrics, HexBoardConfig, HexCellSize, InsetOutset};
use crate::geometry::{BoardError, BoardGeometry};
use crate::hex::{CellCoord, Dimension, HexPolygon, Point};
use crate::orientation::{Orientation, OrientationKey, PhysicalParams};
use crate::shapes::BoardShape;
use tracing::{debug, warn};

/// A board's complete coordinate model.
///
/// Everything except the orientation is fixed at construction. All queries
/// are pure functions of the board's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    pub(crate) geometry: BoardGeometry,
    pub(crate) metrics: CellMetrics,
    pub(crate) margins: InsetOutset,
    pub(crate) orientation: Orientation,
    /// Cached for `orientation`
    pub(crate) params: PhysicalParams,
}

impl HexBoard {
    /// Build a rectangular board from a config
    pub fn new(config: HexBoardConfig) -> Result<Self, BoardError> {
        let geometry = config.geometry()?;
        let metrics = CellMetrics::new(config.cell)?;
        Self::from_parts(geometry, metrics, config.margins)
    }

    /// Build a board for an arbitrary shape with default margins
    pub fn from_shape(shape: BoardShape, cell: HexCellSize) -> Result<Self, BoardError> {
        Self::from_geometry(shape.geometry()?, cell)
    }

    /// Build a board around an existing geometry with default margins
    pub fn from_geometry(geometry: BoardGeometry, cell: HexCellSize) -> Result<Self, BoardError> {
        let metrics = CellMetrics::new(cell)?;
        Self::from_parts(geometry, metrics, InsetOutset::default())
    }

    fn from_parts(
        geometry: BoardGeometry,
        metrics: CellMetrics,
        margins: InsetOutset,
    ) -> Result<Self, BoardError> {
        let orientation = Orientation::IDENTITY;
        let params = PhysicalParams::lookup(OrientationKey::new(
            orientation,
            geometry.trim_low(),
            geometry.trim_high(),
            geometry.num_cols(),
        ));
        debug!(
            cols = geometry.num_cols(),
            rows = geometry.num_rows(),
            masked = geometry.mask().is_some(),
            "created hex board"
        );
        let board = Self {
            geometry,
            metrics,
            margins,
            orientation,
            params,
        };
        board.check_extent()?;
        Ok(board)
    }

    /// Replace the pixel margins
    pub fn with_margins(mut self, margins: InsetOutset) -> Result<Self, BoardError> {
        self.margins = margins;
        self.check_extent()?;
        Ok(self)
    }

    /// Reject boards whose layout leaves the `i32` pixel range.
    ///
    /// The bound covers the hex array plus one super cell of width and two
    /// cells of height, with the margins of either axis on either side, so
    /// every query on an existing cell and every hit test step is exact.
    fn check_extent(&self) -> Result<(), BoardError> {
        let m = &self.metrics;
        let overflow = || {
            warn!(
                cols = self.geometry.num_cols(),
                rows = self.geometry.num_rows(),
                "board too large for pixel coordinates"
            );
            BoardError::PixelOverflow
        };

        let width = ((self.geometry.num_cols() - 1) / 2)
            .checked_mul(m.super_width)
            .and_then(|x| x.checked_add(m.column_step()))
            .and_then(|x| x.checked_add(m.width))
            .and_then(|x| x.checked_add(m.super_width))
            .ok_or_else(overflow)?;
        let height = self
            .geometry
            .num_rows()
            .checked_add(3)
            .and_then(|rows| rows.checked_mul(m.height))
            .ok_or_else(overflow)?;

        let InsetOutset { inset, outset } = self.margins;
        for extent in [width, height] {
            for (before, after) in [(inset.x, outset.x), (inset.y, outset.y)] {
                extent
                    .checked_add(before)
                    .and_then(|e| e.checked_add(after))
                    .ok_or_else(overflow)?;
            }
        }
        Ok(())
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    pub fn margins(&self) -> InsetOutset {
        self.margins
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn physical_params(&self) -> PhysicalParams {
        self.params
    }

    /// Whether the screen axes are currently exchanged
    pub fn is_vertical(&self) -> bool {
        self.params.vertical_orientation
    }

    /// Whether the logical cell `(col, row)` is part of the board
    pub fn exists_on_board(&self, col: i32, row: i32) -> bool {
        self.geometry.exists_on_board(col, row)
    }

    /// Every existing logical cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.geometry.cells()
    }

    // ==================== Orientation ====================

    /// Change the orientation. Rotation is taken modulo 4.
    ///
    /// Returns true when the board switched between horizontal and vertical,
    /// i.e. its on-screen aspect ratio flipped and the owner should resize.
    pub fn set_orientation(&mut self, rotation: i32, flip: bool) -> bool {
        self.set_orientation_state(Orientation::new(rotation, flip))
    }

    /// Restore a saved orientation. Same return value as
    /// [`set_orientation`](Self::set_orientation).
    pub fn set_orientation_state(&mut self, orientation: Orientation) -> bool {
        let was_vertical = self.params.vertical_orientation;
        self.orientation = orientation;
        self.params = PhysicalParams::lookup(OrientationKey::new(
            orientation,
            self.geometry.trim_low(),
            self.geometry.trim_high(),
            self.geometry.num_cols(),
        ));
        let aspect_changed = was_vertical != self.params.vertical_orientation;
        debug!(
            rotation = orientation.rotation(),
            flip = orientation.flip(),
            aspect_changed,
            "orientation changed"
        );
        aspect_changed
    }

    /// Turn the board one quarter clockwise, keeping the flip.
    /// Always changes the aspect ratio, so always returns true.
    pub fn rotate_clockwise(&mut self) -> bool {
        self.set_orientation_state(self.orientation.rotated_clockwise())
    }

    // ==================== Logical -> screen ====================

    pub(crate) fn to_physical(&self, logical: CellCoord) -> CellCoord {
        self.params
            .to_physical(logical, self.geometry.num_cols(), self.geometry.num_rows())
    }

    pub(crate) fn to_logical(&self, physical: CellCoord) -> CellCoord {
        self.params
            .to_logical(physical, self.geometry.num_cols(), self.geometry.num_rows())
    }

    /// Top-left of a physical cell's bounding box in the horizontal frame,
    /// before margins.
    fn physical_anchor(&self, physical: CellCoord) -> Point {
        let m = &self.metrics;
        let odd = physical.is_odd_col();

        // Saturating, so cells far off the board still get a point
        let mut x = (physical.col / 2).saturating_mul(m.super_width);
        if odd {
            x = x.saturating_add(m.column_step());
        }

        let height_halves = physical
            .row
            .saturating_mul(2)
            .saturating_sub(self.params.physical_trim_low as i32)
            .saturating_add(odd as i32);
        let y = m.half_rows_to_pixels(height_halves);

        Point::new(x, y)
    }

    /// Horizontal-frame point → screen point
    fn to_screen(&self, point: Point) -> Point {
        let point = if self.params.vertical_orientation {
            point.swapped()
        } else {
            point
        };
        let inset = self.margins.inset;
        point.translate(inset.x, inset.y)
    }

    /// Top-left corner of the cell's bounding box on screen.
    ///
    /// Only meaningful for cells where [`exists_on_board`](Self::exists_on_board)
    /// is true. Other cells still get a point, it just isn't on the board.
    pub fn screen_anchor_for(&self, col: i32, row: i32) -> Point {
        let physical = self.to_physical(CellCoord::new(col, row));
        self.to_screen(self.physical_anchor(physical))
    }

    /// Center of the cell on screen. Same precondition as
    /// [`screen_anchor_for`](Self::screen_anchor_for).
    ///
    /// The half-cell offset is applied before the axes are exchanged, so in
    /// vertical orientations the anchor moves by `(half_height, half_width)`
    /// rather than `(half_width, half_height)`. The result is the visual
    /// center of the rotated hex.
    pub fn screen_center_for(&self, col: i32, row: i32) -> Point {
        let physical = self.to_physical(CellCoord::new(col, row));
        let anchor = self.physical_anchor(physical);
        let center = anchor.translate(self.metrics.half_width, self.metrics.half_height);
        self.to_screen(center)
    }

    /// Outline of the cell on screen, freshly positioned for this call.
    /// Same precondition as [`screen_anchor_for`](Self::screen_anchor_for).
    pub fn hex_polygon(&self, col: i32, row: i32) -> HexPolygon {
        let m = &self.metrics;
        let anchor = self.physical_anchor(self.to_physical(CellCoord::new(col, row)));
        let left = m.bound_inset;
        let right = m.bound_inset + m.control_line_length;
        let outline = [
            Point::new(left, 0),
            Point::new(right, 0),
            Point::new(m.width, m.half_height),
            Point::new(right, m.height),
            Point::new(left, m.height),
            Point::new(0, m.half_height),
        ];
        HexPolygon::new(outline.map(|p| self.to_screen(p.translate(anchor.x, anchor.y))))
    }

    /// Size of the hex array alone, in the horizontal frame
    pub(crate) fn hex_array_dim(&self) -> Dimension {
        let m = &self.metrics;
        let last_col = self.geometry.num_cols() - 1;
        let width = self.physical_anchor(CellCoord::new(last_col, 0)).x + m.width;

        let trims = self.geometry.trim_low() as i32 + self.geometry.trim_high() as i32;
        let height = m.half_rows_to_pixels(2 * self.geometry.num_rows() + 1 - trims);

        Dimension::new(width, height)
    }

    /// Total pixel footprint of the board component, margins included
    pub fn board_component_dim(&self) -> Dimension {
        let array = if self.params.vertical_orientation {
            self.hex_array_dim().swapped()
        } else {
            self.hex_array_dim()
        };
        let InsetOutset { inset, outset } = self.margins;
        Dimension::new(
            array.width + inset.x + outset.x,
            array.height + inset.y + outset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CELL: HexCellSize = HexCellSize::new(40, 30, 20);

    fn board(cols: i32, rows: i32) -> HexBoard {
        let config = HexBoardConfig::new(cols, rows, CELL)
            .with_margins(InsetOutset::new(Point::ORIGIN, Point::new(1, 1)));
        HexBoard::new(config).unwrap()
    }

    #[test]
    fn test_concrete_anchors() {
        let board = board(4, 4);
        assert_eq!(board.screen_anchor_for(0, 0), Point::new(0, 0));
        assert_eq!(board.screen_anchor_for(1, 0), Point::new(30, 15));
        assert_eq!(board.screen_anchor_for(2, 0), Point::new(60, 0));
        assert_eq!(board.screen_anchor_for(3, 2), Point::new(90, 75));
    }

    #[test]
    fn test_center_is_anchor_plus_half_cell() {
        let board = board(4, 4);
        assert_eq!(board.screen_center_for(0, 0), Point::new(20, 15));
        assert_eq!(board.screen_center_for(1, 0), Point::new(50, 30));
    }

    #[test]
    fn test_inset_translates_everything() {
        let board = board(4, 4)
            .with_margins(InsetOutset::new(Point::new(7, 11), Point::new(1, 1)))
            .unwrap();
        assert_eq!(board.screen_anchor_for(1, 0), Point::new(37, 26));
        assert_eq!(board.board_component_dim(), Dimension::new(130 + 8, 135 + 12));
    }

    #[test]
    fn test_trim_low_lifts_even_columns() {
        let config = HexBoardConfig::new(4, 4, CELL).with_trim(true, false);
        let board = HexBoard::new(config).unwrap();
        // Odd columns move to the top edge, even columns half a row above them
        assert_eq!(board.screen_anchor_for(1, 0), Point::new(30, 0));
        assert_eq!(board.screen_anchor_for(0, 1), Point::new(0, 15));
        // Trimmed cell (0, 0) still gets a point, above the board
        assert_eq!(board.screen_anchor_for(0, 0), Point::new(0, -14));
    }

    #[test]
    fn test_component_dimensions() {
        // 4 columns: 3 steps of 30 plus one full cell; 4 rows plus half a row
        assert_eq!(board(4, 4).board_component_dim(), Dimension::new(131, 136));

        let trimmed = HexBoard::new(HexBoardConfig::new(4, 4, CELL).with_trim(true, true)).unwrap();
        assert_eq!(trimmed.board_component_dim(), Dimension::new(131, 106));

        let single = board(1, 3);
        assert_eq!(single.board_component_dim(), Dimension::new(41, 106));
    }

    #[test]
    fn test_half_turn_moves_origin_to_far_corner() {
        let mut board = board(4, 4);
        assert!(!board.set_orientation(2, false));
        assert_eq!(board.screen_anchor_for(0, 0), Point::new(90, 105));
        assert_eq!(board.screen_anchor_for(3, 3), Point::new(0, 0));
        assert_eq!(board.board_component_dim(), Dimension::new(131, 136));
    }

    #[test]
    fn test_quarter_turn_swaps_axes() {
        let mut board = board(4, 4);
        assert!(board.set_orientation(1, false));
        assert!(board.is_vertical());
        // Top-left corner ends up top-right after a clockwise turn
        assert_eq!(board.screen_anchor_for(0, 0), Point::new(105, 0));
        assert_eq!(board.screen_anchor_for(1, 0), Point::new(90, 30));
        assert_eq!(board.board_component_dim(), Dimension::new(136, 131));
        // Center offsets follow the swapped cell box
        assert_eq!(board.screen_center_for(0, 0), Point::new(120, 20));
    }

    #[test]
    fn test_aspect_change_signal() {
        let mut board = board(5, 3);
        let mut vertical = false;
        for rotation in [1, 1, 2, 3, 0, 0, 2, -1, 4] {
            for flip in [false, true] {
                let changed = board.set_orientation(rotation, flip);
                let now_vertical = rotation.rem_euclid(4) % 2 == 1;
                assert_eq!(changed, now_vertical != vertical, "rotation {} flip {}", rotation, flip);
                vertical = now_vertical;
            }
        }
    }

    #[test]
    fn test_rotate_clockwise_cycles_back() {
        let mut board = board(5, 4);
        let start = board.screen_anchor_for(2, 1);
        for _ in 0..4 {
            assert!(board.rotate_clockwise());
        }
        assert_eq!(board.orientation(), Orientation::IDENTITY);
        assert_eq!(board.screen_anchor_for(2, 1), start);
    }

    #[test]
    fn test_orientation_restore() {
        for (cols, trims) in [(4, (false, false)), (5, (true, false)), (6, (true, true))] {
            let config = HexBoardConfig::new(cols, 5, CELL).with_trim(trims.0, trims.1);
            let mut board = HexBoard::new(config).unwrap();
            let original = board.screen_anchor_for(0, 0);
            for orientation in Orientation::all() {
                board.set_orientation_state(orientation);
                board.set_orientation(0, false);
                assert_eq!(board.screen_anchor_for(0, 0), original, "{:?}", orientation);
            }
        }
    }

    #[test]
    fn test_hex_polygon() {
        let board = board(4, 4);
        let polygon = board.hex_polygon(1, 0);
        assert_eq!(
            polygon.points(),
            &[
                Point::new(40, 15),
                Point::new(60, 15),
                Point::new(70, 30),
                Point::new(60, 45),
                Point::new(40, 45),
                Point::new(30, 30),
            ]
        );
        // Each call builds a fresh outline
        assert_eq!(board.hex_polygon(1, 0), polygon);
    }

    #[test]
    fn test_hex_polygon_vertical() {
        let mut board = board(4, 4);
        board.set_orientation(3, true);
        let anchor = board.screen_anchor_for(2, 2);
        let (top_left, size) = board.hex_polygon(2, 2).bounds();
        assert_eq!(top_left, anchor);
        assert_eq!(size, Dimension::new(30, 40));
    }

    #[test]
    fn test_cells_skip_trimmed() {
        let board = HexBoard::new(HexBoardConfig::new(3, 2, CELL).with_trim(true, false)).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(
            cells,
            vec![
                CellCoord::new(0, 1),
                CellCoord::new(1, 0),
                CellCoord::new(1, 1),
                CellCoord::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = HexBoard::new(HexBoardConfig::new(4, 4, HexCellSize::new(40, 30, 40)));
        assert_eq!(
            result,
            Err(BoardError::InvalidControlLine {
                control: 40,
                width: 40
            })
        );
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        for (cols, rows) in [(i32::MAX, 4), (4, i32::MAX / 2), (80_000_000, 4)] {
            assert_eq!(
                HexBoard::new(HexBoardConfig::new(cols, rows, CELL)),
                Err(BoardError::PixelOverflow)
            );
        }
        let huge_inset = InsetOutset::new(Point::new(i32::MAX - 100, 0), Point::new(1, 1));
        assert_eq!(board(4, 4).with_margins(huge_inset), Err(BoardError::PixelOverflow));
        assert_eq!(
            HexBoard::new(HexBoardConfig::new(4, 4, CELL).with_margins(huge_inset)),
            Err(BoardError::PixelOverflow)
        );
    }

    #[test]
    fn test_far_off_cells_do_not_panic() {
        let mut board = board(5, 4);
        for orientation in Orientation::all() {
            board.set_orientation_state(orientation);
            for (col, row) in [(i32::MIN, i32::MAX), (i32::MAX, i32::MIN), (i32::MAX, i32::MAX)] {
                board.screen_anchor_for(col, row);
                board.screen_center_for(col, row);
                board.hex_polygon(col, row);
            }
        }
    }

    #[test]
    fn test_vertical_center_swaps_half_offsets() {
        let mut board = board(4, 4);
        board.set_orientation(1, false);
        let anchor = board.screen_anchor_for(0, 0);
        let center = board.screen_center_for(0, 0);
        assert_eq!(center, anchor.translate(15, 20));
    }

    #[test]
    fn test_left_triangle_with_even_side_fits_its_component() {
        let geometry = crate::shapes::triangle(4, false).unwrap();
        // The full-height base column is odd, so the low edge is the trimmed one
        assert!(geometry.trim_low());
        assert!(!geometry.trim_high());

        let mut board = HexBoard::from_geometry(geometry.clone(), CELL).unwrap();
        for orientation in Orientation::all() {
            board.set_orientation_state(orientation);
            let dim = board.board_component_dim();
            let InsetOutset { inset, outset } = board.margins();
            let size = if board.is_vertical() {
                Dimension::new(CELL.height, CELL.width)
            } else {
                Dimension::new(CELL.width, CELL.height)
            };
            for cell in board.cells().collect::<Vec<_>>() {
                let anchor = board.screen_anchor_for(cell.col, cell.row);
                assert!(anchor.x >= inset.x && anchor.y >= inset.y, "{:?} {:?}", cell, orientation);
                assert!(anchor.x + size.width <= dim.width - outset.x, "{:?} {:?}", cell, orientation);
                assert!(anchor.y + size.height <= dim.height - outset.y, "{:?} {:?}", cell, orientation);
            }
        }

        // Trimming the high edge instead pushes the base column past the bottom
        let mask = geometry.mask().unwrap().clone();
        let high_trimmed = BoardGeometry::new(4, 4, false, true).unwrap().with_mask(mask).unwrap();
        let board = HexBoard::from_geometry(high_trimmed, CELL).unwrap();
        let bottom = board.screen_anchor_for(3, 3).y + CELL.height;
        assert!(bottom > board.board_component_dim().height - 1);
    }
}
