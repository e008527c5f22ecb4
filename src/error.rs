//! Structured error types for gridmerge.
//!
//! The merge core itself never fails; errors come from the edges: A1 text,
//! bounds-checked entry points, scenario files and grid configs.

/// All errors that can occur outside the infallible merge core.
#[derive(Debug, thiserror::Error)]
pub enum GridMergeError {
    /// Invalid A1 cell reference or range.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Coordinate outside the configured grid.
    #[error("Cell (row {row}, column {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Grid dimensions beyond what a grid may allocate.
    #[error("A {rows}x{columns} grid exceeds the {max_rows}x{max_columns} limit")]
    GridTooLarge {
        rows: u32,
        columns: u32,
        max_rows: u32,
        max_columns: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridMergeError>;

#[cfg(target_arch = "wasm32")]
impl From<GridMergeError> for wasm_bindgen::JsValue {
    fn from(e: GridMergeError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
