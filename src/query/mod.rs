//! Visibility queries over a [`VisibilityTrie`](crate::trie::VisibilityTrie)
//!
//! - `fov`: every cell visible from an origin (pruned trie walk)
//! - `los`: mutual visibility of two cells (ancestor walk)
//! - `reference`: brute-force ray casting used as a baseline
//! - `traits`: the caller-supplied blocker and sinks

pub mod traits;
pub mod fov;
pub mod los;
pub mod reference;

pub use traits::{BlocksVision, TraceSink, VisibilitySink};
pub use fov::FovScratch;
