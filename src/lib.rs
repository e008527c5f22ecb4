//! gridmerge - merge-aware cell range selection for row/column grids
//!
//! Select a rectangle of cells by dragging, merge it into one logical cell,
//! and have later selections snap to cover every merge they touch:
//! - Canonical cell ranges, whatever the drag direction
//! - A merge registry with a per-cell lookup index
//! - Fixed-point expansion so a selection never splits a merge
//! - Pixel geometry and a WASM `MergeView` for the host renderer
//!
//! # Usage (Rust)
//!
//! ```
//! use gridmerge::{CellRange, GridCoordinate, MergeRegistry, SelectionSession};
//!
//! let mut registry = MergeRegistry::new();
//! registry.merge(CellRange::normalize(GridCoordinate::new(1, 1), GridCoordinate::new(2, 2)));
//!
//! let mut session = SelectionSession::new();
//! session.start(GridCoordinate::new(0, 0), &registry);
//! session.update(GridCoordinate::new(1, 1), &registry);
//! let selected = session.finish();
//! assert_eq!(selected.map(|r| r.to_string()), Some("A1:C3".to_string()));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { MergeView } from 'gridmerge';
//! await init();
//! const view = new MergeView(22, 7);
//! view.pointer_down(70, 70);
//! view.pointer_move(150, 100);
//! view.pointer_up();
//! view.merge_selection();
//! ```

pub mod cell_ref;
pub mod error;
pub mod grid;
pub mod layout;
pub mod merge;
pub mod render;
pub mod scenario;
pub mod session;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridMergeError, Result};
pub use grid::MergeGrid;
pub use merge::{expand_to_merges, normalize_drag, MergeRegistry};
pub use session::SelectionSession;
pub use types::*;
pub use viewer::MergeView;

/// Replay a JSON scenario and return the report as a JSON string
///
/// # Errors
/// Returns an error if the scenario is malformed or references cells outside the grid.
#[wasm_bindgen]
pub fn replay_scenario(json: &str) -> std::result::Result<String, JsValue> {
    let report = scenario::Scenario::from_json(json)
        .and_then(|s| scenario::replay(&s))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
