use carrot_finder_core::*;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const TIERS: [Difficulty; 4] = [
    Difficulty::Classic,
    Difficulty::Beginner,
    Difficulty::Intermediate,
    Difficulty::Expert,
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in TIERS {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{difficulty:?}")),
            &difficulty,
            |b, &difficulty| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    RandomItemGenerator::new(seed, Some((0, 0)))
                        .generate(difficulty.size(), difficulty.items())
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for difficulty in TIERS {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{difficulty:?}")),
            &difficulty,
            |b, &difficulty| {
                let config = GameConfig {
                    seed: Some(17),
                    ..GameConfig::from_difficulty(difficulty)
                };
                let session = GameSession::new(config).unwrap();
                b.iter(|| api::reveal(black_box(&session), (4, 4)).unwrap())
            },
        );
    }
    group.finish();
}

/// Worst case for flood reveal: an empty board opens in one click.
fn bench_flood_empty(c: &mut Criterion) {
    let board = Board::from_item_coords((255, 255), &[]).unwrap();
    let session = GameSession::from_board(board, GameConfig::default());
    c.bench_function("flood_empty_255", |b| {
        b.iter(|| api::reveal(black_box(&session), (127, 127)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_first_reveal, bench_flood_empty);
criterion_main!(benches);
