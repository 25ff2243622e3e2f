use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    SamplingMode
};

use hedgehog_variants::{Hedgehog, HedgehogGrid};
use hedgehog_variants::generator::{Generator, Reducer};
use hedgehog_variants::solver::{BacktrackingSolver, Solution, Solver};
use hedgehog_variants::topology::{Topology, Variant};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use std::time::Duration;

// Explanation of benchmark classes:
//
// backtracking: The BacktrackingSolver on fixture puzzles of both sizes.
// generation: A full generate-and-reduce cycle with a seeded RNG.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SAMPLE_SIZE: usize = 100;

fn orchard() -> Hedgehog {
    let grid = HedgehogGrid::from_numbers(&[
        vec![
            vec![32, -1, -1],
            vec![36,  4, 18],
            vec![ 8, 24, 28]
        ],
        vec![
            vec![11, 13, -1],
            vec![ 1, -1,  5],
            vec![27, 29,  7]
        ],
        vec![
            vec![-1, -1, 17],
            vec![ 9, 23, 15],
            vec![33, 25, 19]
        ],
        vec![
            vec![ 2, 30,  6],
            vec![-1, -1, -1],
            vec![26, 34, -1]
        ]
    ]).unwrap();
    Hedgehog::with_variant(grid, Variant::Plain).unwrap()
}

fn warren() -> Hedgehog {
    let grid = HedgehogGrid::from_numbers(&[
        vec![
            vec![59, -1, -1, -1],
            vec![61,  3, 39,  1],
            vec![57, -1, 41, 55],
            vec![31, 45, -1, -1]
        ],
        vec![
            vec![34, 36, -1, 16],
            vec![62, -1, 28,  2],
            vec![-1, -1, -1, -1],
            vec![44, 52, 24, 20]
        ],
        vec![
            vec![60,  4, 40, -1],
            vec![-1, -1, 38, -1],
            vec![58, 46, -1, 22],
            vec![-1, 14, -1, 64]
        ],
        vec![
            vec![-1, -1, -1, -1],
            vec![33, 11, 25, 17],
            vec![ 7, -1, -1, -1],
            vec![63, -1, 29, -1]
        ]
    ]).unwrap();
    Hedgehog::with_variant(grid, Variant::Plain).unwrap()
}

fn meadow() -> Hedgehog {
    let grid = HedgehogGrid::from_numbers(&[
        vec![
            vec![-1, -1, -1, 27],
            vec![-1, -1, -1, -1],
            vec![55, 57,  5, 59],
            vec![-1, 17, 63, 61]
        ],
        vec![
            vec![-1, 32, -1, -1],
            vec![-1, -1, -1, 40],
            vec![58, -1, -1, -1],
            vec![-1, 62, 14, 64]
        ],
        vec![
            vec![-1, 18, 42, -1],
            vec![24,  8, -1, -1],
            vec![-1, -1, 34, 60],
            vec![-1, -1, -1, -1]
        ],
        vec![
            vec![21, 45, 43, 41],
            vec![51,  9, 49, -1],
            vec![-1, -1, 15,  1],
            vec![53, -1, -1, 29]
        ]
    ]).unwrap();
    Hedgehog::with_variant(grid, Variant::Plain).unwrap()
}

fn solve_fixture(hedgehog: &Hedgehog) {
    match BacktrackingSolver.solve(hedgehog) {
        Solution::Solved(grid) =>
            assert!(hedgehog.is_valid_solution(&grid).unwrap()),
        Solution::Unsolvable => panic!("fixture puzzle not solvable")
    }
}

fn benchmark_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    let orchard = orchard();
    group.bench_function("orchard",
        |b| b.iter(|| solve_fixture(&orchard)));

    let warren = warren();
    group.bench_function("warren", |b| b.iter(|| solve_fixture(&warren)));

    let meadow = meadow();
    group.bench_function("meadow", |b| b.iter(|| solve_fixture(&meadow)));
}

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("generate and reduce", |b| b.iter(|| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
        let mut reducer =
            Reducer::new(BacktrackingSolver, ChaCha8Rng::seed_from_u64(43));
        let topology = Topology::for_variant(4, Variant::Plain).unwrap();
        let mut hedgehog = generator.generate(2, 2, topology).unwrap();
        reducer.reduce(&mut hedgehog);
        hedgehog
    }));
}

criterion_group!(all,
    benchmark_backtracking,
    benchmark_generation
);

criterion_main!(all);
