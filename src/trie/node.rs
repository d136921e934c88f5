//! Visibility trie node

use glam::IVec2;

use crate::math::CellKey;

/// Index of a node in the trie arena. The root is always `NodeId::ROOT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the 8 unit steps between neighboring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    /// Number of directions (child slots per node)
    pub const COUNT: usize = 8;

    /// Direction of a unit step, or `None` for zero or non-adjacent steps.
    pub fn from_step(step: IVec2) -> Option<Self> {
        if step == IVec2::ZERO || step.x.abs() > 1 || step.y.abs() > 1 {
            return None;
        }
        // 3x3 neighborhood index with the center (4) removed
        let cell = (step.x + 1) + 3 * (step.y + 1);
        let slot = if cell > 4 { cell - 1 } else { cell };
        Some(Self(slot as u8))
    }

    /// Child slot for this direction, in `0..COUNT`.
    #[inline]
    pub fn slot(self) -> usize {
        self.0 as usize
    }

    /// Unit step for this direction.
    #[cfg(test)]
    pub(crate) fn step(self) -> IVec2 {
        let cell = if self.0 >= 4 { self.0 as i32 + 1 } else { self.0 as i32 };
        IVec2::new(cell % 3 - 1, cell / 3 - 1)
    }

    /// All directions in slot order.
    #[cfg(test)]
    pub(crate) fn all() -> impl Iterator<Item = Direction> {
        (0..Self::COUNT as u8).map(Direction)
    }
}

/// A cell offset reachable from the origin along at least one precomputed ray.
///
/// Nodes are owned by the trie arena and link to each other by [`NodeId`].
/// `parent` is a navigational link for ancestor walks, not ownership.
#[derive(Clone, Debug)]
pub struct TrieNode {
    /// Position relative to the origin
    pub offset: IVec2,
    /// Cached key of `offset`
    pub key: CellKey,
    /// Previous cell on the ray (`None` only for the root)
    pub parent: Option<NodeId>,
    /// Steps from the root
    pub depth: u32,
    children: [Option<NodeId>; Direction::COUNT],
    /// Keys of every LOS candidate in this subtree, this node included.
    /// A blocker here hides all of them except itself.
    dependents: Vec<CellKey>,
}

impl TrieNode {
    pub(crate) fn new(offset: IVec2, key: CellKey, parent: Option<NodeId>, depth: u32) -> Self {
        Self {
            offset,
            key,
            parent,
            depth,
            children: [None; Direction::COUNT],
            dependents: Vec::new(),
        }
    }

    /// Child reached by stepping in `dir`, if any ray does so.
    #[inline]
    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        self.children[dir.slot()]
    }

    pub(crate) fn set_child(&mut self, dir: Direction, id: NodeId) {
        debug_assert!(self.children[dir.slot()].is_none());
        self.children[dir.slot()] = Some(id);
    }

    /// Present children in slot order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Number of present children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Keys of the targets whose ray runs through this node.
    pub fn dependent_targets(&self) -> &[CellKey] {
        &self.dependents
    }

    pub(crate) fn push_dependent(&mut self, key: CellKey) {
        self.dependents.push(key);
    }
}
