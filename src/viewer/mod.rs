//! `MergeView` - the WASM-exported entry point for a merge-aware grid.
//!
//! The host page owns rendering and gesture recognition. It forwards pointer
//! positions (in grid content pixels) and gets back the range to highlight:
//! - `pointer_down` / `pointer_move` / `pointer_up` drive one selection
//! - `merge_selection` commits the last finished selection
//! - `range_covering` tells the renderer which cells draw as one block
//!
//! Ranges cross the boundary as `[from_row, from_col, to_row, to_col]`.

mod events;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;

use crate::grid::MergeGrid;
use crate::types::{CellRange, GridConfig, GridCoordinate, MAX_COLUMN_COUNT, MAX_ROW_COUNT};

/// Merge-aware selection controller exported to JavaScript.
#[wasm_bindgen]
pub struct MergeView {
    grid: MergeGrid,
    /// Called with the highlighted range after every selection change
    #[cfg(target_arch = "wasm32")]
    highlight_callback: Option<Function>,
}

#[wasm_bindgen]
impl MergeView {
    /// Create a view over a `rows` x `columns` grid with default cell metrics.
    ///
    /// Dimensions are clamped to `MAX_ROW_COUNT` x `MAX_COLUMN_COUNT`.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, columns: u32) -> MergeView {
        Self::from_config(GridConfig::with_size(
            rows.min(MAX_ROW_COUNT),
            columns.min(MAX_COLUMN_COUNT),
        ))
    }

    /// Create a view from a JSON `GridConfig` (camelCase keys, all optional).
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the grid is too large.
    pub fn with_config_json(json: &str) -> Result<MergeView, JsValue> {
        let config: GridConfig = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid grid config: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid grid config: {e}")))?;
        Ok(Self::from_config(config))
    }

    /// Number of merged ranges.
    pub fn merge_count(&self) -> usize {
        self.grid.registry().len()
    }

    /// The merged range containing `(row, col)`, if any.
    pub fn range_covering(&self, row: u32, col: u32) -> Option<Vec<u32>> {
        self.grid
            .range_covering(GridCoordinate::new(row, col))
            .map(range_to_vec)
    }

    /// True if `(row, col)` is the top-left cell of a merge.
    pub fn is_merge_origin(&self, row: u32, col: u32) -> bool {
        self.grid
            .registry()
            .is_merge_origin(GridCoordinate::new(row, col))
    }

    /// Bounds `[x, y, width, height]` to draw for `(row, col)`.
    ///
    /// A merge origin spans its whole merge; `None` for the other cells of a
    /// merge, which the renderer skips.
    pub fn cell_rect(&self, row: u32, col: u32) -> Option<Vec<f32>> {
        let rect = self
            .grid
            .geometry()
            .merged_cell_rect(GridCoordinate::new(row, col), self.grid.registry());
        if rect.skip {
            return None;
        }
        Some(vec![rect.x, rect.y, rect.width, rect.height])
    }

    /// Current highlight as `[x, y, width, height]` in content pixels.
    pub fn selection_rect(&self) -> Option<Vec<f64>> {
        self.grid
            .selection_rect()
            .map(|rect| vec![rect.x, rect.y, rect.w, rect.h])
    }

    /// Merged ranges as a JSON array of `{from, to}` objects, in merge order.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn merged_ranges_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.grid.registry().merged_ranges())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl MergeView {
    /// Merged ranges as JavaScript objects.
    pub fn merged_ranges(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.grid.registry().merged_ranges())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Register a function called with `[from_row, from_col, to_row, to_col]`
    /// whenever the highlighted range changes.
    pub fn set_highlight_callback(&mut self, callback: Function) {
        self.highlight_callback = Some(callback);
    }
}

impl MergeView {
    /// View over a trusted config. Callers holding untrusted input run
    /// [`GridConfig::validate`] first.
    pub fn from_config(config: GridConfig) -> MergeView {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        MergeView {
            grid: MergeGrid::new(config),
            #[cfg(target_arch = "wasm32")]
            highlight_callback: None,
        }
    }

    /// The coordinate-level controller behind this view.
    pub fn grid(&self) -> &MergeGrid {
        &self.grid
    }
}

fn range_to_vec(range: CellRange) -> Vec<u32> {
    let (start_row, start_col, end_row, end_col) = range.bounds();
    vec![start_row, start_col, end_row, end_col]
}
