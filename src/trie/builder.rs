//! Trie construction from rasterized rays

use std::time::Instant;

use glam::IVec2;

use super::node::{Direction, NodeId, TrieNode};
use super::visibility_trie::VisibilityTrie;
use crate::core::config::Density;
use crate::math::{CellKey, KeyCodec, Line};

/// Builds a [`VisibilityTrie`] by merging rays cast from the origin.
///
/// Every node that ends up in the LOS lookup is a *candidate*. When a
/// candidate is registered, its key is appended to the dependents of every
/// node on its root path, so a blocker anywhere on that path can hide it.
pub struct TrieBuilder {
    codec: KeyCodec,
    density: Density,
    nodes: Vec<TrieNode>,
    candidates: Vec<Vec<NodeId>>,
    targets: Vec<CellKey>,
    /// Root path of the ray currently being cast
    path: Vec<NodeId>,
}

impl TrieBuilder {
    /// Create a builder containing only the root.
    pub fn new(radius: i32, density: Density) -> Self {
        assert!(radius > 0, "radius must be positive");
        let codec = KeyCodec::new(radius);
        let root = TrieNode::new(IVec2::ZERO, codec.encode(IVec2::ZERO), None, 0);

        let mut builder = Self {
            codec,
            density,
            nodes: vec![root],
            candidates: vec![Vec::new(); codec.key_count()],
            targets: Vec::new(),
            path: vec![NodeId::ROOT],
        };
        // The observer's own cell
        builder.register(NodeId::ROOT);
        builder
    }

    /// Cast all rays for the configured density and freeze the result.
    pub fn build(mut self) -> VisibilityTrie {
        let start = Instant::now();

        match self.density {
            Density::Dense => self.cast_dense(),
            Density::Sparse => self.cast_sparse(),
        }

        let dependents: usize = self.nodes.iter().map(|n| n.dependent_targets().len()).sum();
        log::debug!(
            "VisibilityTrie: radius {} {:?} built {} nodes, {} targets, {} dependents in {:.2?}",
            self.codec.radius(),
            self.density,
            self.nodes.len(),
            self.targets.len(),
            dependents,
            start.elapsed()
        );

        VisibilityTrie::from_parts(self.codec, self.density, self.nodes, self.targets, self.candidates)
    }

    /// One ray per cell inside the radius; only the ray's last node becomes a candidate.
    fn cast_dense(&mut self) {
        let radius = self.codec.radius();
        for x in -radius..=radius {
            for y in -radius..=radius {
                let target = IVec2::new(x, y);
                if !self.within_radius(target) {
                    continue;
                }
                let end = self.cast_ray(target, false);
                if end != NodeId::ROOT {
                    self.register(end);
                }
            }
        }
    }

    /// Rays to the border of the bounding square; every new node becomes a candidate.
    /// Corner cells come up twice, and the second ray adds nothing.
    fn cast_sparse(&mut self) {
        let radius = self.codec.radius();
        for i in -radius..=radius {
            for target in [
                IVec2::new(-radius, i),
                IVec2::new(radius, i),
                IVec2::new(i, -radius),
                IVec2::new(i, radius),
            ] {
                self.cast_ray(target, true);
            }
        }
    }

    /// Walk the ray from the origin towards `target`, creating missing nodes.
    /// Stops at the first cell outside the radius. Returns the last node reached.
    fn cast_ray(&mut self, target: IVec2, register_new: bool) -> NodeId {
        self.path.clear();
        self.path.push(NodeId::ROOT);

        let mut current = NodeId::ROOT;
        let mut previous = IVec2::ZERO;

        // Lines from the origin never move back towards it, so the first
        // out-of-range cell ends the in-range part of the ray.
        for cell in Line::new(IVec2::ZERO, target).skip(1) {
            if !self.within_radius(cell) {
                break;
            }
            let dir = Direction::from_step(cell - previous)
                .expect("consecutive line cells are 8-connected");
            previous = cell;

            current = match self.nodes[current.index()].child(dir) {
                Some(child) => {
                    self.path.push(child);
                    child
                }
                None => {
                    let child = self.add_node(current, dir, cell);
                    self.path.push(child);
                    if register_new {
                        self.register(child);
                    }
                    child
                }
            };
        }

        current
    }

    fn add_node(&mut self, parent: NodeId, dir: Direction, offset: IVec2) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(TrieNode::new(offset, self.codec.encode(offset), Some(parent), depth));
        self.nodes[parent.index()].set_child(dir, id);
        id
    }

    /// Make `id` (the last node of `self.path`) an LOS candidate for its cell.
    fn register(&mut self, id: NodeId) {
        debug_assert_eq!(self.path.last(), Some(&id));
        let key = self.nodes[id.index()].key;

        let slot = &mut self.candidates[key.index()];
        if slot.is_empty() {
            self.targets.push(key);
        }
        slot.push(id);

        for &on_path in &self.path {
            self.nodes[on_path.index()].push_dependent(key);
        }
    }

    fn within_radius(&self, offset: IVec2) -> bool {
        let r = self.codec.radius();
        offset.x * offset.x + offset.y * offset.y <= r * r
    }
}
