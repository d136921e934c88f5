//! Brute-force ray casting without a trie.
//!
//! Rasterizes one ray per target on every call. Far slower than the trie
//! walk, but obviously correct, which makes it the baseline for benchmarks
//! and the oracle for dense-mode tests. Uses the same line and the same endpoint
//! rule as the trie queries.

use glam::IVec2;

use super::traits::{BlocksVision, VisibilitySink};
use crate::math::Line;

/// Report every cell within `radius` of `origin` whose ray is clear.
pub fn field_of_view<B, S>(radius: i32, origin: IVec2, blocker: &B, sink: &mut S)
where
    B: BlocksVision + ?Sized,
    S: VisibilitySink + ?Sized,
{
    for x in -radius..=radius {
        for y in -radius..=radius {
            if x * x + y * y > radius * radius {
                continue;
            }
            let target = origin + IVec2::new(x, y);
            if interior_is_clear(origin, target, blocker) {
                sink.set_visible(target);
            }
        }
    }
}

/// Whether `from` and `to` see each other along the direct ray.
pub fn line_of_sight<B>(radius: i32, from: IVec2, to: IVec2, blocker: &B) -> bool
where
    B: BlocksVision + ?Sized,
{
    let dx = to.x as i64 - from.x as i64;
    let dy = to.y as i64 - from.y as i64;
    let r = radius as i64;
    if dx.abs() > r || dy.abs() > r || dx * dx + dy * dy > r * r {
        return false;
    }
    interior_is_clear(from, to, blocker)
}

/// No cell strictly between `from` and `to` blocks.
fn interior_is_clear<B>(from: IVec2, to: IVec2, blocker: &B) -> bool
where
    B: BlocksVision + ?Sized,
{
    let line = Line::new(from, to);
    let interior = line.len().saturating_sub(2);
    line.skip(1).take(interior).all(|cell| !blocker.blocks_vision(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Density;
    use crate::query::FovScratch;
    use crate::test_support::scattered_walls;
    use crate::trie::VisibilityTrie;

    #[test]
    fn test_interior_excludes_endpoints() {
        let all = |_: IVec2| true;
        assert!(interior_is_clear(IVec2::ZERO, IVec2::ZERO, &all));
        assert!(interior_is_clear(IVec2::ZERO, IVec2::new(1, 1), &all));
        assert!(!interior_is_clear(IVec2::ZERO, IVec2::new(2, 0), &all));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!line_of_sight(3, IVec2::ZERO, IVec2::new(3, 1), &|_: IVec2| false));
        assert!(line_of_sight(3, IVec2::ZERO, IVec2::new(3, 0), &|_: IVec2| false));
    }

    #[test]
    fn test_dense_trie_matches_reference() {
        for radius in [3, 7, 10] {
            let trie = VisibilityTrie::new(radius, Density::Dense);
            let mut scratch = FovScratch::for_trie(&trie);
            for seed in 0..5 {
                let walls = scattered_walls(seed, radius + 4, 30);
                let blocker = |c: IVec2| walls.contains(&c);
                let origin = IVec2::new(seed as i32, -(seed as i32));

                let mut expected = Vec::new();
                field_of_view(radius, origin, &blocker, &mut |c: IVec2| expected.push(c));
                let mut actual = trie.visible_cells(&mut scratch, origin, &blocker);
                expected.sort_by_key(|c| (c.x, c.y));
                actual.sort_by_key(|c| (c.x, c.y));
                assert_eq!(actual, expected, "radius {radius} seed {seed}");

                for &cell in &expected {
                    assert!(line_of_sight(radius, origin, cell, &blocker));
                    assert!(trie.line_of_sight(origin, cell, &blocker));
                }
            }
        }
    }
}
