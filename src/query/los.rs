//! Line of sight: ancestor walk from a candidate node back to the root.
//!
//! The relative offset `to - from` selects the candidate nodes for that cell
//! directly through the key lookup, so no ray is rasterized at query time.
//! A candidate is clear when none of its cells strictly between the two
//! endpoints blocks. Endpoints are never tested, which is what makes the
//! answer independent of which end is the observer.

use glam::IVec2;

use super::traits::{BlocksVision, TraceSink};
use crate::trie::{NodeId, VisibilityTrie};

impl VisibilityTrie {
    /// Whether `to` is within the sight radius of `from`.
    pub fn in_range(&self, from: IVec2, to: IVec2) -> bool {
        self.reaches_wide(to.x as i64 - from.x as i64, to.y as i64 - from.y as i64)
    }

    /// Whether `from` and `to` can see each other.
    ///
    /// Returns `false` without calling `blocker` when `to` is out of range.
    pub fn line_of_sight<B>(&self, from: IVec2, to: IVec2, blocker: &B) -> bool
    where
        B: BlocksVision + ?Sized,
    {
        self.clear_candidate(from, to, blocker).is_some()
    }

    /// Like [`line_of_sight`](Self::line_of_sight), and on success passes the
    /// sight line to `trace` from `to` back to `from`, both inclusive.
    ///
    /// `trace` is not called when the result is `false`.
    pub fn line_of_sight_traced<B, T>(&self, from: IVec2, to: IVec2, blocker: &B, trace: &mut T) -> bool
    where
        B: BlocksVision + ?Sized,
        T: TraceSink + ?Sized,
    {
        let Some(candidate) = self.clear_candidate(from, to, blocker) else {
            return false;
        };
        for id in self.ancestors(candidate) {
            trace.trace(from + self.node(id).offset);
        }
        true
    }

    /// The clear sight line from `from` to `to`, ordered from `from` to `to`.
    pub fn sight_path<B>(&self, from: IVec2, to: IVec2, blocker: &B) -> Option<Vec<IVec2>>
    where
        B: BlocksVision + ?Sized,
    {
        let candidate = self.clear_candidate(from, to, blocker)?;
        let mut path: Vec<IVec2> = self
            .ancestors(candidate)
            .map(|id| from + self.node(id).offset)
            .collect();
        path.reverse();
        Some(path)
    }

    /// First candidate for `to - from`, in registration order, with a clear chain.
    fn clear_candidate<B>(&self, from: IVec2, to: IVec2, blocker: &B) -> Option<NodeId>
    where
        B: BlocksVision + ?Sized,
    {
        if !self.in_range(from, to) {
            return None;
        }
        let key = self.codec().encode(to - from);
        self.candidates(key)
            .iter()
            .copied()
            .find(|&candidate| self.chain_is_clear(candidate, from, blocker))
    }

    /// No node strictly between `candidate` and the root blocks.
    fn chain_is_clear<B>(&self, candidate: NodeId, from: IVec2, blocker: &B) -> bool
    where
        B: BlocksVision + ?Sized,
    {
        self.ancestors(candidate)
            .skip(1)
            .take_while(|&id| id != NodeId::ROOT)
            .all(|id| !blocker.blocks_vision(from + self.node(id).offset))
    }
}
