//! Partial board shapes built from staggered triangle fills.
//!
//! Games that don't use the full rectangle (Hex, Chinese checkers, ...)
//! describe their board as a mask over a rectangular envelope. Every shape
//! here is assembled from [`triangle_fill`], which walks sideways one column
//! at a time, shrinking by one cell per column.

use crate::geometry::{BoardError, BoardGeometry};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// A board outline that can be turned into a [`BoardGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardShape {
    /// Full rectangle with optional edge trims
    Rectangle {
        cols: i32,
        rows: i32,
        #[serde(default)]
        trim_low: bool,
        #[serde(default)]
        trim_high: bool,
    },
    /// Diamond of `side * side` cells (the Hex board)
    Rhombus { side: i32 },
    /// Six-pointed star (the Chinese checkers board)
    Star { side: i32 },
    /// Triangle pointing left or right
    Triangle { side: i32, facing_right: bool },
}

impl BoardShape {
    /// Build the geometry for this shape
    pub fn geometry(&self) -> Result<BoardGeometry, BoardError> {
        match *self {
            BoardShape::Rectangle {
                cols,
                rows,
                trim_low,
                trim_high,
            } => BoardGeometry::new(cols, rows, trim_low, trim_high),
            BoardShape::Rhombus { side } => rhombus(side),
            BoardShape::Star { side } => star(side),
            BoardShape::Triangle { side, facing_right } => triangle(side, facing_right),
        }
    }
}

/// Fill a triangle of cells in `mask`.
///
/// Starting with column `start_col`, sets `start_height` cells from
/// `start_row` downwards to `value`, then moves one column right (or left),
/// one cell shorter. When leaving an odd column the start row moves down by
/// one, following the half-cell stagger. Stops once the height drops below
/// `end_height`. Cells outside the mask are skipped.
pub fn triangle_fill(
    mask: &mut Grid<bool>,
    start_col: i32,
    start_row: i32,
    start_height: i32,
    end_height: i32,
    face_right: bool,
    value: bool,
) {
    let step = if face_right { 1 } else { -1 };
    let (mut col, mut row, mut height) = (start_col, start_row, start_height);

    while height >= end_height && height > 0 {
        for r in row..row + height {
            mask.set(col, r, value);
        }
        height -= 1;
        row += col & 1;
        col += step;
    }
}

/// Trim flags that keep a shape flush with the top of its envelope when its
/// tallest column is `base_col` and starts at row 0.
fn trims_for_base_column(base_col: i32) -> (bool, bool) {
    let odd = base_col & 1 == 1;
    (odd, !odd)
}

/// Largest side any generator accepts
pub const MAX_SIDE: i32 = 1024;

fn check_side(side: i32) -> Result<(), BoardError> {
    if !(1..=MAX_SIDE).contains(&side) {
        return Err(BoardError::InvalidSideSize(side));
    }
    Ok(())
}

/// Diamond board with `side` cells along each edge.
///
/// The envelope is `(2 * side - 1) × side`; the middle column is full height
/// and each column outwards loses one cell.
pub fn rhombus(side: i32) -> Result<BoardGeometry, BoardError> {
    check_side(side)?;
    let (cols, rows) = (2 * side - 1, side);
    let middle = side - 1;

    let mut mask = Grid::new(cols as usize, rows as usize, false);
    triangle_fill(&mut mask, middle, 0, side, 1, true, true);
    triangle_fill(&mut mask, middle, 0, side, 1, false, true);

    let (trim_low, trim_high) = trims_for_base_column(middle);
    BoardGeometry::new(cols, rows, trim_low, trim_high)?.with_mask(mask)
}

/// Six-pointed star with `side` cells along each point's edge.
///
/// Two overlapping triangles of height `3 * side + 1`: one pointing right
/// from column `side`, one pointing left from column `3 * side`. The
/// envelope is `(4 * side + 1) × (3 * side + 1)`.
pub fn star(side: i32) -> Result<BoardGeometry, BoardError> {
    check_side(side)?;
    let (cols, rows) = (4 * side + 1, 3 * side + 1);

    let mut mask = Grid::new(cols as usize, rows as usize, false);
    triangle_fill(&mut mask, side, 0, rows, 1, true, true);
    triangle_fill(&mut mask, 3 * side, 0, rows, 1, false, true);

    let (trim_low, trim_high) = trims_for_base_column(side);
    BoardGeometry::new(cols, rows, trim_low, trim_high)?.with_mask(mask)
}

/// Triangle with `side` cells along each edge, its full-height column on the
/// left when `facing_right` and on the right otherwise.
pub fn triangle(side: i32, facing_right: bool) -> Result<BoardGeometry, BoardError> {
    check_side(side)?;
    let base = if facing_right { 0 } else { side - 1 };

    let mut mask = Grid::new(side as usize, side as usize, false);
    triangle_fill(&mut mask, base, 0, side, 1, facing_right, true);

    let (trim_low, trim_high) = trims_for_base_column(base);
    BoardGeometry::new(side, side, trim_low, trim_high)?.with_mask(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mask_of(geometry: &BoardGeometry) -> String {
        geometry.mask().map(|m| m.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_rhombus_5() {
        let geometry = rhombus(5).unwrap();
        assert_eq!((geometry.num_cols(), geometry.num_rows()), (9, 5));
        assert!(!geometry.trim_low());
        assert!(geometry.trim_high());
        assert_eq!(
            mask_of(&geometry),
            "\
...###...
.#######.
#########
..#####..
....#....
"
        );
        assert_eq!(geometry.cell_count(), 25);
    }

    #[test]
    fn test_rhombus_even_side_trims_low() {
        let geometry = rhombus(4).unwrap();
        assert_eq!((geometry.num_cols(), geometry.num_rows()), (7, 4));
        assert!(geometry.trim_low());
        assert!(!geometry.trim_high());
        assert_eq!(
            mask_of(&geometry),
            "\
...#...
.#####.
#######
..###..
"
        );
        assert_eq!(geometry.cell_count(), 16);
    }

    #[test]
    fn test_star_3() {
        let geometry = star(3).unwrap();
        assert_eq!((geometry.num_cols(), geometry.num_rows()), (13, 10));
        assert_eq!(
            mask_of(&geometry),
            "\
...#.....#...
...###.###...
...#######...
...#######...
.###########.
#############
..#########..
...#######...
...#######...
...##...##...
"
        );
        assert_eq!(geometry.cell_count(), 73);
    }

    #[test]
    fn test_star_4_is_chinese_checkers_board() {
        let geometry = star(4).unwrap();
        assert_eq!((geometry.num_cols(), geometry.num_rows()), (17, 13));
        assert_eq!(geometry.cell_count(), 121);
    }

    #[test]
    fn test_triangle_facing_right() {
        let geometry = triangle(5, true).unwrap();
        assert_eq!((geometry.num_cols(), geometry.num_rows()), (5, 5));
        assert!(!geometry.trim_low());
        assert!(geometry.trim_high());
        assert_eq!(
            mask_of(&geometry),
            "\
##...
####.
#####
###..
#....
"
        );
    }

    #[test]
    fn test_triangle_facing_left_mirrors_right() {
        let geometry = triangle(5, false).unwrap();
        assert_eq!(
            mask_of(&geometry),
            "\
...##
.####
#####
..###
....#
"
        );
        assert_eq!(geometry.cell_count(), 15);
    }

    #[test]
    fn test_triangle_facing_left_even_side() {
        // Base column 3 is odd, so the layout trims low instead
        let geometry = triangle(4, false).unwrap();
        assert!(geometry.trim_low());
        assert!(!geometry.trim_high());
        assert_eq!(geometry.cell_count(), 10);
    }

    #[test]
    fn test_fill_clears_with_false() {
        let mut mask = Grid::new(3, 3, true);
        triangle_fill(&mut mask, 0, 0, 3, 2, true, false);
        // Column 0 gets 3 cells, column 1 gets 2, then the height drops below 2
        assert_eq!(mask.count_set(), 9 - 5);
        assert_eq!(mask.get(2, 0), Some(&true));
    }

    #[test]
    fn test_fill_ignores_cells_off_grid() {
        let mut mask = Grid::new(2, 2, false);
        triangle_fill(&mut mask, 1, 0, 4, 1, true, true);
        assert_eq!(mask.count_set(), 2);
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(rhombus(0), Err(BoardError::InvalidSideSize(0)));
        assert!(star(-2).is_err());
        assert!(triangle(0, true).is_err());
        assert_eq!(star(i32::MAX), Err(BoardError::InvalidSideSize(i32::MAX)));
        assert_eq!(
            rhombus(MAX_SIDE + 1),
            Err(BoardError::InvalidSideSize(MAX_SIDE + 1))
        );
    }

    #[test]
    fn test_shape_from_json() {
        let shape: BoardShape = serde_json::from_str(r#"{"kind": "star", "side": 2}"#).unwrap();
        assert_eq!(shape, BoardShape::Star { side: 2 });
        assert_eq!(shape.geometry().unwrap().cell_count(), 6 * 3 + 19);

        let shape: BoardShape =
            serde_json::from_str(r#"{"kind": "rectangle", "cols": 3, "rows": 2}"#).unwrap();
        assert_eq!(shape.geometry().unwrap().cell_count(), 6);
    }
}
