//! Value types shared by the merge core and its collaborators.

mod config;
mod coord;
mod range;

pub use config::*;
pub use coord::*;
pub use range::*;
