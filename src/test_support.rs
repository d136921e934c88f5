//! Shared fixtures for unit tests.

use std::collections::HashSet;

use glam::IVec2;

/// Cells with `x² + y² <= radius²`, x-major then y, ascending.
pub(crate) fn in_circle(radius: i32) -> Vec<IVec2> {
    let mut cells = Vec::new();
    for x in -radius..=radius {
        for y in -radius..=radius {
            if x * x + y * y <= radius * radius {
                cells.push(IVec2::new(x, y));
            }
        }
    }
    cells
}

/// Deterministic pseudo-random walls covering about `percent`% of the square
/// `[-extent, extent]²`.
pub(crate) fn scattered_walls(seed: u32, extent: i32, percent: u32) -> HashSet<IVec2> {
    let mut walls = HashSet::new();
    for x in -extent..=extent {
        for y in -extent..=extent {
            if mix(seed, x, y) % 100 < percent {
                walls.insert(IVec2::new(x, y));
            }
        }
    }
    walls
}

fn mix(seed: u32, x: i32, y: i32) -> u32 {
    let mut h = seed.wrapping_mul(0x9E37_79B9)
        ^ (x as u32).wrapping_mul(0x85EB_CA6B)
        ^ (y as u32).wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    h
}

/// Parse an ASCII map where `#` is a wall. Row index is y, column is x.
pub(crate) fn parse_map(rows: &[&str]) -> HashSet<IVec2> {
    let mut walls = HashSet::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                walls.insert(IVec2::new(x as i32, y as i32));
            }
        }
    }
    walls
}
