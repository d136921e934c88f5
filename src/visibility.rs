//! One-stop visibility engine: a shared trie plus a private FOV scratch buffer.

use std::sync::Arc;

use glam::IVec2;

use crate::core::config::{Density, VisibilityConfig};
use crate::core::types::Result;
use crate::query::{BlocksVision, FovScratch, TraceSink, VisibilitySink};
use crate::trie::VisibilityTrie;

/// Symmetric FOV and LOS for a fixed radius.
///
/// The trie is reference counted; [`fork`](Self::fork) hands out engines
/// that share it but own their scratch, one per thread. `fov` takes
/// `&mut self`, so two FOV queries can never race on the same scratch.
///
/// ```
/// use glam::IVec2;
/// use vistrie::{Density, VisibilityEngine};
///
/// let mut engine = VisibilityEngine::new(5, Density::Dense);
/// let wall = IVec2::new(2, 0);
/// let blocker = |cell: IVec2| cell == wall;
///
/// let mut seen = Vec::new();
/// engine.fov(IVec2::ZERO, &blocker, &mut |cell: IVec2| seen.push(cell));
/// assert!(seen.contains(&wall));
/// assert!(!seen.contains(&IVec2::new(3, 0)));
///
/// assert!(engine.los(IVec2::ZERO, IVec2::new(2, 1), &blocker));
/// assert!(!engine.los(IVec2::new(3, 0), IVec2::ZERO, &blocker));
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityEngine {
    trie: Arc<VisibilityTrie>,
    scratch: FovScratch,
}

impl VisibilityEngine {
    /// Build the trie for `radius`.
    ///
    /// # Panics
    /// If `radius` is not positive or is too large; see [`VisibilityTrie::new`].
    pub fn new(radius: i32, density: Density) -> Self {
        Self::from_trie(Arc::new(VisibilityTrie::new(radius, density)))
    }

    /// Build the trie for `radius`, returning an error for an invalid radius.
    pub fn try_new(radius: i32, density: Density) -> Result<Self> {
        Ok(Self::from_trie(Arc::new(VisibilityTrie::try_new(radius, density)?)))
    }

    pub fn from_config(config: &VisibilityConfig) -> Result<Self> {
        Ok(Self::from_trie(Arc::new(VisibilityTrie::from_config(config)?)))
    }

    /// Wrap an existing, possibly shared, trie.
    pub fn from_trie(trie: Arc<VisibilityTrie>) -> Self {
        let scratch = FovScratch::for_trie(&trie);
        Self { trie, scratch }
    }

    /// A new engine sharing this trie with its own scratch buffer.
    pub fn fork(&self) -> Self {
        Self::from_trie(Arc::clone(&self.trie))
    }

    pub fn trie(&self) -> &Arc<VisibilityTrie> {
        &self.trie
    }

    pub fn radius(&self) -> i32 {
        self.trie.radius()
    }

    pub fn density(&self) -> Density {
        self.trie.density()
    }

    /// Report every cell visible from `origin`, once each.
    pub fn fov<B, S>(&mut self, origin: IVec2, blocker: &B, sink: &mut S)
    where
        B: BlocksVision + ?Sized,
        S: VisibilitySink + ?Sized,
    {
        self.trie.field_of_view(&mut self.scratch, origin, blocker, sink);
    }

    /// Collect the cells visible from `origin`.
    pub fn visible_cells<B>(&mut self, origin: IVec2, blocker: &B) -> Vec<IVec2>
    where
        B: BlocksVision + ?Sized,
    {
        self.trie.visible_cells(&mut self.scratch, origin, blocker)
    }

    /// Whether `a` and `b` see each other.
    pub fn los<B>(&self, a: IVec2, b: IVec2, blocker: &B) -> bool
    where
        B: BlocksVision + ?Sized,
    {
        self.trie.line_of_sight(a, b, blocker)
    }

    /// [`los`](Self::los) that also reports the sight line from `b` back to `a`.
    pub fn los_traced<B, T>(&self, a: IVec2, b: IVec2, blocker: &B, trace: &mut T) -> bool
    where
        B: BlocksVision + ?Sized,
        T: TraceSink + ?Sized,
    {
        self.trie.line_of_sight_traced(a, b, blocker, trace)
    }

    /// The clear sight line from `a` to `b`, if any.
    pub fn sight_path<B>(&self, a: IVec2, b: IVec2, blocker: &B) -> Option<Vec<IVec2>>
    where
        B: BlocksVision + ?Sized,
    {
        self.trie.sight_path(a, b, blocker)
    }
}
