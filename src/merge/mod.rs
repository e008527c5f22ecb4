//! Merged cell bookkeeping and merge-aware range resolution.
//!
//! - [`MergeRegistry`] owns the merged ranges and the per-cell lookup index
//! - [`resolver`] normalizes drags and expands selections against the registry

mod registry;
pub mod resolver;

pub use registry::MergeRegistry;
pub use resolver::{expand_to_merges, normalize_drag, resolve};
