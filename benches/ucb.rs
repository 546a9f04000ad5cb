use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use adsel::{run_ucb1, DenseTable};

fn synthetic_table(rounds: usize, arms: usize, seed: u64) -> DenseTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..rounds * arms)
        .map(|_| if rng.gen_bool(0.15) { 1.0 } else { 0.0 })
        .collect();
    DenseTable::from_flat(arms, values).expect("aligned by construction")
}

fn bench_run_ucb1(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_ucb1");
    for &(rounds, arms) in &[(1_000usize, 10usize), (10_000, 10), (10_000, 100)] {
        let table = synthetic_table(rounds, arms, 7);
        group.bench_with_input(
            BenchmarkId::new("rounds_x_arms", format!("{rounds}x{arms}")),
            &table,
            |b, t| {
                b.iter(|| {
                    let r = run_ucb1(black_box(t), rounds, arms).unwrap();
                    black_box(r);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_run_ucb1);
criterion_main!(benches);
