use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::collections::HashSet;

use vistrie::query::reference;
use vistrie::{Density, FovScratch, IVec2, VisibilityTrie};

/// Roughly 20% walls around the origin, deterministic per cell.
fn scattered_walls(extent: i32) -> HashSet<IVec2> {
    let mut walls = HashSet::new();
    for x in -extent..=extent {
        for y in -extent..=extent {
            let mut h = (x as u32).wrapping_mul(0x85EB_CA6B) ^ (y as u32).wrapping_mul(0xC2B2_AE35);
            h ^= h >> 16;
            h = h.wrapping_mul(0x7FEB_352D);
            h ^= h >> 15;
            if h % 5 == 0 && (x, y) != (0, 0) {
                walls.insert(IVec2::new(x, y));
            }
        }
    }
    walls
}

fn bench_trie_build_sparse_16(c: &mut Criterion) {
    c.bench_function("trie_build_sparse_16", |b| {
        b.iter(|| VisibilityTrie::new(black_box(16), Density::Sparse));
    });
}

fn bench_trie_build_dense_16(c: &mut Criterion) {
    c.bench_function("trie_build_dense_16", |b| {
        b.iter(|| VisibilityTrie::new(black_box(16), Density::Dense));
    });
}

fn bench_trie_build_sparse_64(c: &mut Criterion) {
    c.bench_function("trie_build_sparse_64", |b| {
        b.iter(|| VisibilityTrie::new(black_box(64), Density::Sparse));
    });
}

fn bench_fov_trie_16(c: &mut Criterion) {
    let trie = VisibilityTrie::new(16, Density::Sparse);
    let mut scratch = FovScratch::for_trie(&trie);
    let walls = scattered_walls(20);
    let blocker = |cell: IVec2| walls.contains(&cell);

    c.bench_function("fov_trie_16", |b| {
        b.iter(|| {
            let mut count = 0usize;
            trie.field_of_view(&mut scratch, black_box(IVec2::ZERO), &blocker, &mut |_: IVec2| count += 1);
            black_box(count);
        });
    });
}

fn bench_fov_reference_16(c: &mut Criterion) {
    let walls = scattered_walls(20);
    let blocker = |cell: IVec2| walls.contains(&cell);

    c.bench_function("fov_reference_16", |b| {
        b.iter(|| {
            let mut count = 0usize;
            reference::field_of_view(16, black_box(IVec2::ZERO), &blocker, &mut |_: IVec2| count += 1);
            black_box(count);
        });
    });
}

fn bench_los_trie_16(c: &mut Criterion) {
    let trie = VisibilityTrie::new(16, Density::Sparse);
    let walls = scattered_walls(20);
    let blocker = |cell: IVec2| walls.contains(&cell);
    let targets: Vec<IVec2> = (-11..=11).map(|i| IVec2::new(i, 11 - i.abs())).collect();

    c.bench_function("los_trie_16", |b| {
        b.iter(|| {
            let seen = targets
                .iter()
                .filter(|&&t| trie.line_of_sight(black_box(IVec2::ZERO), t, &blocker))
                .count();
            black_box(seen);
        });
    });
}

criterion_group!(
    benches,
    bench_trie_build_sparse_16,
    bench_trie_build_dense_16,
    bench_trie_build_sparse_64,
    bench_fov_trie_16,
    bench_fov_reference_16,
    bench_los_trie_16,
);
criterion_main!(benches);
