use criterion::{criterion_group, criterion_main, Criterion, black_box};
use boardcore::diff::munkres::solve;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_square(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| (0..n).map(|_| rng.gen_range(0..100) as f64).collect()).collect()
}

fn bench_munkres(c: &mut Criterion) {
    for n in [8usize, 32, 64, 256] {
        let m = random_square(n, n as u64);
        c.bench_function(&format!("munkres_{n}x{n}"), |ben| {
            ben.iter(|| {
                let v = solve(black_box(&m), 0.0);
                black_box(v)
            })
        });
    }
}

criterion_group!(benches, bench_munkres);
criterion_main!(benches);
