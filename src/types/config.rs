use serde::{Deserialize, Serialize};

use crate::error::{GridMergeError, Result};

/// Default number of rows in a new grid.
pub const DEFAULT_ROW_COUNT: u32 = 22;

/// Default number of columns in a new grid.
pub const DEFAULT_COLUMN_COUNT: u32 = 7;

/// Largest accepted row count.
pub const MAX_ROW_COUNT: u32 = 1_048_576;

/// Largest accepted column count.
pub const MAX_COLUMN_COUNT: u32 = 16_384;

/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 60.0;

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 30.0;

/// Default outset of the selection highlight around the selected cells, in pixels.
pub const DEFAULT_SELECTION_OUTSET: f32 = 4.0;

/// Grid dimensions and pixel metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of rows
    pub row_count: u32,
    /// Number of columns
    pub column_count: u32,
    /// Width of every column in pixels
    pub column_width: f32,
    /// Height of every row in pixels
    pub row_height: f32,
    /// How far the selection highlight extends past the selected cells
    pub selection_outset: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            selection_outset: DEFAULT_SELECTION_OUTSET,
        }
    }
}

impl GridConfig {
    /// Config for a `row_count` x `column_count` grid with default metrics.
    pub fn with_size(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            ..Self::default()
        }
    }

    /// Reject dimensions above [`MAX_ROW_COUNT`] x [`MAX_COLUMN_COUNT`].
    ///
    /// Geometry allocates one edge per row and column, so configs read from
    /// untrusted JSON go through here first.
    pub fn validate(&self) -> Result<()> {
        if self.row_count > MAX_ROW_COUNT || self.column_count > MAX_COLUMN_COUNT {
            return Err(GridMergeError::GridTooLarge {
                rows: self.row_count,
                columns: self.column_count,
                max_rows: MAX_ROW_COUNT,
                max_columns: MAX_COLUMN_COUNT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig::with_size(MAX_ROW_COUNT, MAX_COLUMN_COUNT)
            .validate()
            .is_ok());
    }

    #[test]
    fn oversized_config_is_rejected() {
        let config: GridConfig = serde_json::from_str(r#"{"rowCount":4000000000}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(GridMergeError::GridTooLarge { rows: 4_000_000_000, columns: 7, .. })
        ));
        assert!(GridConfig::with_size(1, MAX_COLUMN_COUNT + 1).validate().is_err());
    }
}
