//! Precomputed visibility trie
//!
//! A prefix tree of the rasterized rays from the origin to every cell within
//! a radius. Rays that share a prefix share nodes, so checking all rays
//! against a blocker map becomes one pruned walk of the tree.

pub mod node;
pub mod builder;
pub mod visibility_trie;

pub use node::{Direction, NodeId, TrieNode};
pub use builder::TrieBuilder;
pub use visibility_trie::VisibilityTrie;
