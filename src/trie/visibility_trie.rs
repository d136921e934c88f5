//! Precomputed visibility trie container

use glam::IVec2;

use super::builder::TrieBuilder;
use super::node::{NodeId, TrieNode};
use crate::core::config::{Density, VisibilityConfig};
use crate::core::types::Result;
use crate::math::{CellKey, KeyCodec};

/// Prefix tree of every ray cast from the origin out to `radius`.
///
/// Built once and immutable afterwards, so it is `Send + Sync` and can be
/// shared between threads. Queries live in [`crate::query`]; FOV additionally
/// needs a [`FovScratch`](crate::query::FovScratch) per concurrent caller.
#[derive(Debug, Clone)]
pub struct VisibilityTrie {
    /// Node arena; the root is at index 0
    nodes: Vec<TrieNode>,
    codec: KeyCodec,
    density: Density,
    /// One key per reachable cell, in registration order
    targets: Vec<CellKey>,
    /// LOS candidates per key, indexed by `CellKey::index`
    candidates: Vec<Vec<NodeId>>,
}

impl VisibilityTrie {
    /// Build a trie for `radius`.
    ///
    /// # Panics
    /// If `radius` is not positive or exceeds
    /// [`Density::max_radius`](crate::core::config::Density::max_radius).
    pub fn new(radius: i32, density: Density) -> Self {
        let config = VisibilityConfig::new(radius, density);
        if let Err(err) = config.validate() {
            panic!("invalid visibility trie radius: {err}");
        }
        TrieBuilder::new(radius, density).build()
    }

    /// Build a trie, rejecting invalid radii with an error instead of panicking.
    pub fn try_new(radius: i32, density: Density) -> Result<Self> {
        Self::from_config(&VisibilityConfig::new(radius, density))
    }

    /// Build a trie from a validated config.
    pub fn from_config(config: &VisibilityConfig) -> Result<Self> {
        config.validate().inspect_err(|err| {
            log::warn!("Rejected visibility config {:?}: {}", config, err);
        })?;
        Ok(TrieBuilder::new(config.radius, config.density).build())
    }

    pub(crate) fn from_parts(
        codec: KeyCodec,
        density: Density,
        nodes: Vec<TrieNode>,
        targets: Vec<CellKey>,
        candidates: Vec<Vec<NodeId>>,
    ) -> Self {
        Self { nodes, codec, density, targets, candidates }
    }

    pub fn radius(&self) -> i32 {
        self.codec.radius()
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Key codec shared by the lookup table and FOV scratch buffers.
    pub fn codec(&self) -> &KeyCodec {
        &self.codec
    }

    /// Root node (offset `(0, 0)`)
    pub fn root(&self) -> &TrieNode {
        &self.nodes[0]
    }

    /// Get node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// All nodes, root first
    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node.
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Keys of all reachable cells, one per cell.
    pub fn targets(&self) -> &[CellKey] {
        &self.targets
    }

    /// LOS candidates for `key`: nodes whose offset is that key's cell and
    /// whose root path is a ray that was cast.
    #[inline]
    pub fn candidates(&self, key: CellKey) -> &[NodeId] {
        &self.candidates[key.index()]
    }

    #[inline]
    pub fn candidate_count(&self, key: CellKey) -> usize {
        self.candidates[key.index()].len()
    }

    /// Whether `offset` is within the sight radius.
    pub fn reaches(&self, offset: IVec2) -> bool {
        self.reaches_wide(offset.x as i64, offset.y as i64)
    }

    /// Range test on a widened delta, so differences of two `i32` points never overflow.
    pub(crate) fn reaches_wide(&self, dx: i64, dy: i64) -> bool {
        let r = self.radius() as i64;
        dx.abs() <= r && dy.abs() <= r && dx * dx + dy * dy <= r * r
    }

    /// `id` followed by each of its ancestors up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self.nodes[n.index()].parent)
    }
}
