//! Pointer and commit handlers for `MergeView`.
//!
//! Positions are translated to cells through the grid geometry; positions that
//! hit no cell are ignored rather than treated as errors.

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Array;

use super::{range_to_vec, MergeView};
use crate::types::{CellRange, GridCoordinate};

#[wasm_bindgen]
impl MergeView {
    /// Begin a selection at pixel `(x, y)`. Returns the highlighted range.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<Vec<u32>> {
        let cell = self.cell_at(x, y)?;
        let range = self.grid.start(cell).ok()?;
        self.report(range);
        Some(range_to_vec(range))
    }

    /// Extend the selection to pixel `(x, y)`. Ignored when not selecting.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Vec<u32>> {
        let cell = self.cell_at(x, y)?;
        let range = self.grid.update(cell).ok()??;
        self.report(range);
        Some(range_to_vec(range))
    }

    /// End the selection and remember it for `merge_selection`.
    pub fn pointer_up(&mut self) -> Option<Vec<u32>> {
        self.grid.finish().map(range_to_vec)
    }

    /// Abandon the selection in progress.
    pub fn cancel(&mut self) {
        self.grid.cancel();
    }

    /// Merge the last finished selection. Returns the merged range.
    pub fn merge_selection(&mut self) -> Option<Vec<u32>> {
        let merged = self.grid.merge_selection()?;
        self.report(merged);
        Some(range_to_vec(merged))
    }
}

impl MergeView {
    fn cell_at(&self, x: f32, y: f32) -> Option<GridCoordinate> {
        self.grid.geometry().coordinate_at(x, y)
    }

    #[cfg(target_arch = "wasm32")]
    fn report(&self, range: CellRange) {
        if let Some(callback) = &self.highlight_callback {
            let bounds: Array = range_to_vec(range).into_iter().map(JsValue::from).collect();
            let _ = callback.call1(&JsValue::NULL, &bounds);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn report(&self, range: CellRange) {
        tracing::trace!(%range, "highlight");
    }
}
