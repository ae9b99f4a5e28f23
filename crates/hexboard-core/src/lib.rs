//! Hexboard - coordinate geometry for hexagonal game boards
//!
//! This crate provides the board model shared by the hex-based games:
//! - Offset cell coordinates and pixel value types
//! - Board shapes: trimmed rectangles and masked partial boards
//! - Display orientation (4 rotations × optional flip)
//! - Forward mapping from cells to screen anchors, centers and outlines
//! - Hit testing from screen pixels back to cells
//!
//! # Architecture
//!
//! Everything is pure, synchronous computation. Drawing, input events and
//! game rules live with the callers; this crate only answers "where is this
//! cell?" and "which cell is here?". It can be compiled to:
//! - Native Rust for server-side or desktop use
//! - WebAssembly for browser clients (`wasm` feature)
//!
//! # Modules
//!
//! - [`hex`]: Cell coordinates, points, dimensions and hex outlines
//! - [`grid`]: Bounds-checked column-major grids (existence masks)
//! - [`geometry`]: Board extent, trims and existence
//! - [`shapes`]: Rhombus, star and triangle boards
//! - [`config`]: Board configuration and derived cell metrics
//! - [`orientation`]: Orientation state and physical layout parameters
//! - [`board`]: The board component and cell → screen mapping
//! - [`hit`]: Screen → cell hit testing

pub mod board;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod hex;
pub mod hit;
pub mod orientation;
pub mod shapes;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::HexBoard;
pub use config::{CellMetrics, HexBoardConfig, HexCellSize, InsetOutset};
pub use geometry::{BoardError, BoardGeometry};
pub use grid::Grid;
pub use hex::{CellCoord, Dimension, HexPolygon, Point};
pub use orientation::{Orientation, OrientationKey, PhysicalParams};
pub use shapes::{rhombus, star, triangle, triangle_fill, BoardShape};
