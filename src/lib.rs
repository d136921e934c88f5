//! Vistrie - precomputed symmetric field of view and line of sight on grids
//!
//! A [`VisibilityTrie`] stores every ray cast from the origin to a fixed
//! radius as a prefix tree. Field of view walks the tree once, pruning the
//! subtree behind each blocker; line of sight follows a single root path.
//! Both are evaluated relative to any observer position.

pub mod core;
pub mod math;
pub mod trie;
pub mod query;
pub mod visibility;

#[cfg(test)]
mod test_support;

pub use crate::core::{Density, Error, IVec2, Result, VisibilityConfig};
pub use query::{BlocksVision, FovScratch, TraceSink, VisibilitySink};
pub use trie::VisibilityTrie;
pub use visibility::VisibilityEngine;
