//! Field of view: pruned walk of the visibility trie.
//!
//! The walk starts at the root's children and tests each node against the
//! caller's blocker. A blocking node stops the descent and marks every
//! candidate in its subtree, except itself, as cut off; walls are visible,
//! cells behind them are not. Work is bounded by the part of the trie that
//! is actually in view, not by the number of rays.
//!
//! The origin is the observer's own cell: it is never tested and always
//! reported visible.

use glam::IVec2;

use super::traits::{BlocksVision, VisibilitySink};
use crate::trie::{NodeId, VisibilityTrie};

/// Reusable working memory for FOV queries.
///
/// Holds one cut-off counter per cell key plus the traversal stack. One
/// scratch buffer serves one FOV at a time; give each thread its own and
/// share the trie.
#[derive(Debug, Default, Clone)]
pub struct FovScratch {
    /// How many of a key's candidates were hidden by a blocker
    cut: Vec<u32>,
    stack: Vec<NodeId>,
}

impl FovScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scratch sized for `trie`, so the first query does not allocate.
    pub fn for_trie(trie: &VisibilityTrie) -> Self {
        Self {
            cut: vec![0; trie.codec().key_count()],
            stack: Vec::with_capacity(trie.max_depth() as usize * 8),
        }
    }

    fn reset(&mut self, key_count: usize) {
        self.cut.clear();
        self.cut.resize(key_count, 0);
        self.stack.clear();
    }
}

impl VisibilityTrie {
    /// Report every cell visible from `origin` to `sink`.
    ///
    /// Each visible cell is reported exactly once, in the trie's target
    /// order. A cell is visible when at least one of its rays has no
    /// blocking cell strictly between `origin` and the cell.
    pub fn field_of_view<B, S>(
        &self,
        scratch: &mut FovScratch,
        origin: IVec2,
        blocker: &B,
        sink: &mut S,
    ) where
        B: BlocksVision + ?Sized,
        S: VisibilitySink + ?Sized,
    {
        scratch.reset(self.codec().key_count());
        let FovScratch { cut, stack } = scratch;

        // Reversed so the lowest slot pops first (pre-order)
        stack.extend(self.root().children().rev());

        let mut blockers = 0usize;
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if blocker.blocks_vision(origin + node.offset) {
                blockers += 1;
                for &key in node.dependent_targets() {
                    if key != node.key {
                        cut[key.index()] += 1;
                    }
                }
                continue;
            }
            stack.extend(node.children().rev());
        }

        let mut visible = 0usize;
        for &key in self.targets() {
            if (cut[key.index()] as usize) < self.candidate_count(key) {
                sink.set_visible(origin + self.codec().decode(key));
                visible += 1;
            }
        }

        log::trace!(
            "FOV from {}: {} visible, {} blockers hit",
            origin,
            visible,
            blockers
        );
    }

    /// Collect the cells visible from `origin`.
    pub fn visible_cells<B>(&self, scratch: &mut FovScratch, origin: IVec2, blocker: &B) -> Vec<IVec2>
    where
        B: BlocksVision + ?Sized,
    {
        let mut cells = Vec::new();
        self.field_of_view(scratch, origin, blocker, &mut |cell: IVec2| cells.push(cell));
        cells
    }
}
