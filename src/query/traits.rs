//! Caller-side capabilities used by visibility queries.
//!
//! Queries call back into the caller's world through these traits. All of
//! them receive absolute grid coordinates and are invoked synchronously on
//! the calling thread. Implementations must not start another FOV on the
//! scratch buffer that is currently in use; LOS queries on the same trie are
//! fine. Panics inside a callback propagate to the caller unchanged.
//!
//! Closures implement each trait directly. Annotate the argument type
//! (`|cell: IVec2| ...`) since the trait bound alone does not pin it down.

use glam::IVec2;

/// Answers whether a cell stops sight (a wall, thick fog, a closed door).
///
/// Should be a pure function of `cell` for the duration of a query.
pub trait BlocksVision {
    fn blocks_vision(&self, cell: IVec2) -> bool;
}

impl<F> BlocksVision for F
where
    F: Fn(IVec2) -> bool + ?Sized,
{
    #[inline]
    fn blocks_vision(&self, cell: IVec2) -> bool {
        self(cell)
    }
}

/// Receives each cell found visible by a field-of-view query.
pub trait VisibilitySink {
    fn set_visible(&mut self, cell: IVec2);
}

impl<F> VisibilitySink for F
where
    F: FnMut(IVec2) + ?Sized,
{
    #[inline]
    fn set_visible(&mut self, cell: IVec2) {
        self(cell)
    }
}

/// Receives the cells of a clear sight line, from the target back to the observer.
pub trait TraceSink {
    fn trace(&mut self, cell: IVec2);
}

impl<F> TraceSink for F
where
    F: FnMut(IVec2) + ?Sized,
{
    #[inline]
    fn trace(&mut self, cell: IVec2) {
        self(cell)
    }
}
