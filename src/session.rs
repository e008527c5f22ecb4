//! One select-by-drag interaction, from pointer down to pointer up.
//!
//! The session never merges anything itself: `finish` hands back the candidate
//! range and committing it is a separate, explicit action by the caller.

use crate::merge::{resolve, MergeRegistry};
use crate::types::{CellRange, GridCoordinate};

/// State of the current selection interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionSession {
    /// No interaction in progress
    #[default]
    Idle,
    /// Dragging from `anchor`; `current` is already normalized and expanded
    Active {
        anchor: GridCoordinate,
        current: CellRange,
    },
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Begin an interaction at `cell` and return the range to highlight.
    ///
    /// Starting while already active replaces the previous interaction.
    pub fn start(&mut self, cell: GridCoordinate, registry: &MergeRegistry) -> CellRange {
        let current = resolve(cell, cell, registry);
        *self = Self::Active {
            anchor: cell,
            current,
        };
        current
    }

    /// Move the dragged corner to `cell`. Ignored while idle.
    pub fn update(&mut self, cell: GridCoordinate, registry: &MergeRegistry) -> Option<CellRange> {
        let Self::Active { anchor, current } = self else {
            return None;
        };
        *current = resolve(*anchor, cell, registry);
        Some(*current)
    }

    /// End the interaction, returning the selection as a commit candidate.
    pub fn finish(&mut self) -> Option<CellRange> {
        let current = self.current();
        *self = Self::Idle;
        current
    }

    /// Abandon the interaction without producing a candidate.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn anchor(&self) -> Option<GridCoordinate> {
        match self {
            Self::Active { anchor, .. } => Some(*anchor),
            Self::Idle => None,
        }
    }

    pub fn current(&self) -> Option<CellRange> {
        match self {
            Self::Active { current, .. } => Some(*current),
            Self::Idle => None,
        }
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

    fn c(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    #[test]
    fn idle_ignores_update_and_finish() {
        let registry = MergeRegistry::new();
        let mut session = SelectionSession::new();
        assert_eq!(session.update(c(3, 3), &registry), None);
        assert_eq!(session.finish(), None);
        assert!(!session.is_active());
    }

    #[test]
    fn start_update_finish_cycle() {
        let registry = MergeRegistry::new();
        let mut session = SelectionSession::new();

        let started = session.start(c(3, 3), &registry);
        assert_eq!(started, CellRange::single(c(3, 3)));
        assert_eq!(session.anchor(), Some(c(3, 3)));

        let updated = session.update(c(1, 1), &registry).unwrap();
        assert_eq!(updated, CellRange::normalize(c(1, 1), c(3, 3)));

        // Anchor stays fixed while the pointer moves back past it
        let updated = session.update(c(4, 5), &registry).unwrap();
        assert_eq!(updated, CellRange::normalize(c(3, 3), c(4, 5)));

        assert_eq!(session.finish(), Some(updated));
        assert_eq!(session, SelectionSession::Idle);
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn start_snaps_to_merge() {
        let mut registry = MergeRegistry::new();
        registry.merge(CellRange::normalize(c(1, 1), c(2, 2)));
        let mut session = SelectionSession::new();
        assert_eq!(
            session.start(c(2, 2), &registry),
            CellRange::normalize(c(1, 1), c(2, 2))
        );
    }

    #[test]
    fn cancel_discards_candidate() {
        let registry = MergeRegistry::new();
        let mut session = SelectionSession::new();
        session.start(c(0, 0), &registry);
        session.cancel();
        assert_eq!(session.current(), None);
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn restart_replaces_anchor() {
        let registry = MergeRegistry::new();
        let mut session = SelectionSession::new();
        session.start(c(0, 0), &registry);
        session.start(c(5, 5), &registry);
        assert_eq!(
            session.update(c(6, 6), &registry),
            Some(CellRange::normalize(c(5, 5), c(6, 6)))
        );
    }
}
