//! WebAssembly bindings for the hex board geometry.
//!
//! This module exposes board layout and hit testing to JavaScript through
//! wasm-bindgen. Structured values cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::board::HexBoard;
use crate::config::{HexBoardConfig, HexCellSize};
use crate::shapes::BoardShape;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed board wrapper
#[wasm_bindgen]
pub struct WasmHexBoard {
    board: HexBoard,
}

#[wasm_bindgen]
impl WasmHexBoard {
    /// Create a rectangular board from a JSON `HexBoardConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmHexBoard, JsValue> {
        let config = HexBoardConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid board config: {}", e)))?;
        let board = HexBoard::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmHexBoard { board })
    }

    /// Create a shaped board, e.g. `{"kind": "star", "side": 4}`
    #[wasm_bindgen(js_name = fromShape)]
    pub fn from_shape(
        shape_json: &str,
        cell_width: i32,
        cell_height: i32,
        control_line_length: i32,
    ) -> Result<WasmHexBoard, JsValue> {
        let shape: BoardShape = serde_json::from_str(shape_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid shape JSON: {}", e)))?;
        let cell = HexCellSize::new(cell_width, cell_height, control_line_length);
        let board = HexBoard::from_shape(shape, cell).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmHexBoard { board })
    }

    /// Check whether a logical cell is part of the board
    #[wasm_bindgen(js_name = existsOnBoard)]
    pub fn exists_on_board(&self, col: i32, row: i32) -> bool {
        self.board.exists_on_board(col, row)
    }

    /// Change orientation; returns true when the aspect ratio flipped
    #[wasm_bindgen(js_name = setOrientation)]
    pub fn set_orientation(&mut self, rotation: i32, flip: bool) -> bool {
        self.board.set_orientation(rotation, flip)
    }

    /// Get the current orientation as JSON (the only state worth saving)
    #[wasm_bindgen(js_name = getOrientation)]
    pub fn get_orientation(&self) -> String {
        serde_json::to_string(&self.board.orientation()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Top-left screen corner of a cell as `[x, y]`
    #[wasm_bindgen(js_name = getScreenAnchorFor)]
    pub fn get_screen_anchor_for(&self, col: i32, row: i32) -> Vec<i32> {
        let p = self.board.screen_anchor_for(col, row);
        vec![p.x, p.y]
    }

    /// Screen center of a cell as `[x, y]`
    #[wasm_bindgen(js_name = getScreenCenterFor)]
    pub fn get_screen_center_for(&self, col: i32, row: i32) -> Vec<i32> {
        let p = self.board.screen_center_for(col, row);
        vec![p.x, p.y]
    }

    /// Outline of a cell as a flat `[x0, y0, x1, y1, ...]` array
    #[wasm_bindgen(js_name = getHexPolygon)]
    pub fn get_hex_polygon(&self, col: i32, row: i32) -> Vec<i32> {
        self.board
            .hex_polygon(col, row)
            .points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// Board component size as `[width, height]`
    #[wasm_bindgen(js_name = getBoardComponentDim)]
    pub fn get_board_component_dim(&self) -> Vec<i32> {
        let dim = self.board.board_component_dim();
        vec![dim.width, dim.height]
    }

    /// Logical cell under a screen point as `[col, row]`, `[-1, -1]` off board
    #[wasm_bindgen(js_name = getBoardCoords)]
    pub fn get_board_coords(&self, screen_x: i32, screen_y: i32) -> Vec<i32> {
        let cell = self.board.board_coords_or_off_board(screen_x, screen_y);
        vec![cell.col, cell.row]
    }

    /// All existing cells as JSON `[{col, row}, ...]`
    #[wasm_bindgen(js_name = getCells)]
    pub fn get_cells(&self) -> String {
        let cells: Vec<_> = self.board.cells().collect();
        serde_json::to_string(&cells).unwrap_or_else(|_| "[]".to_string())
    }
}
