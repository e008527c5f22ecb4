//! Scripted interactions: a JSON list of selection events replayed against a grid.
//!
//! ```json
//! {
//!   "grid": { "rowCount": 22, "columnCount": 7 },
//!   "events": [
//!     { "op": "merge_range", "range": "B2:C3" },
//!     { "op": "start", "cell": "A1" },
//!     { "op": "update", "cell": "B2" },
//!     { "op": "finish" },
//!     { "op": "merge" }
//!   ]
//! }
//! ```
//!
//! Cells and ranges are A1 references. The report lists every highlighted
//! range, every finished selection and the merged ranges at the end.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::MergeGrid;
use crate::types::{CellRange, GridConfig, GridCoordinate};

/// A grid setup plus the events to replay on it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub grid: GridConfig,
    pub events: Vec<Event>,
}

/// One interaction event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Event {
    /// Pointer down on a cell
    Start { cell: String },
    /// Drag to a cell
    Update { cell: String },
    /// Pointer up
    Finish,
    /// Abandon the interaction
    Cancel,
    /// Merge the last finished selection
    Merge,
    /// Merge an explicit range
    MergeRange { range: String },
}

/// A range reported to the renderer after an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Index of the event in the scenario
    pub event: usize,
    /// A1 range
    pub range: String,
}

/// Outcome of replaying a scenario; ranges are A1 references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub highlights: Vec<Highlight>,
    pub finished: Vec<String>,
    pub merged_ranges: Vec<String>,
}

impl Scenario {
    /// Parse a scenario and validate its grid config.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.grid.validate()?;
        Ok(scenario)
    }

    /// Read and parse a scenario file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Replay every event of `scenario` on a fresh grid.
///
/// # Errors
/// Returns an error for an oversized grid, malformed A1 references or cells
/// outside the grid.
pub fn replay(scenario: &Scenario) -> Result<ReplayReport> {
    let mut grid = MergeGrid::try_new(scenario.grid.clone())?;
    let mut report = ReplayReport::default();

    for (index, event) in scenario.events.iter().enumerate() {
        let highlighted = match event {
            Event::Start { cell } => Some(grid.start(cell.parse::<GridCoordinate>()?)?),
            Event::Update { cell } => grid.update(cell.parse::<GridCoordinate>()?)?,
            Event::Finish => {
                if let Some(finished) = grid.finish() {
                    report.finished.push(finished.to_string());
                }
                None
            }
            Event::Cancel => {
                grid.cancel();
                None
            }
            Event::Merge => grid.merge_selection(),
            Event::MergeRange { range } => Some(grid.merge_range(range.parse::<CellRange>()?)?),
        };

        if let Some(range) = highlighted {
            report.highlights.push(Highlight {
                event: index,
                range: range.to_string(),
            });
        }
    }

    report.merged_ranges = grid
        .registry()
        .merged_ranges()
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(report)
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
    use crate::error::GridMergeError;

    #[test]
    fn parses_tagged_events() {
        let scenario = Scenario::from_json(
            r#"{"events":[{"op":"start","cell":"B3"},{"op":"finish"},{"op":"merge_range","range":"A1:B2"}]}"#,
        )
        .unwrap();
        assert_eq!(scenario.grid, GridConfig::default());
        assert_eq!(
            scenario.events,
            vec![
                Event::Start { cell: "B3".into() },
                Event::Finish,
                Event::MergeRange { range: "A1:B2".into() },
            ]
        );
    }

    #[test]
    fn bad_reference_is_an_error() {
        let scenario = Scenario {
            grid: GridConfig::default(),
            events: vec![Event::Start { cell: "??".into() }],
        };
        assert!(matches!(replay(&scenario), Err(GridMergeError::CellRef(_))));
    }

    #[test]
    fn oversized_grid_fails_to_parse() {
        let err = Scenario::from_json(r#"{"grid":{"rowCount":4000000000},"events":[]}"#)
            .unwrap_err();
        assert!(matches!(err, GridMergeError::GridTooLarge { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Scenario::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, GridMergeError::Io(_)));
    }

    #[test]
    fn unknown_op_fails_to_parse() {
        assert!(Scenario::from_json(r#"{"events":[{"op":"explode"}]}"#).is_err());
    }
}
