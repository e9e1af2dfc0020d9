use anyhow::Result;
use boardcore::diff::munkres::{matching_cost, solve};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "assign-check", about = "Cross-check the assignment solver against brute force")]
struct Args {
    /// Number of random matrices
    #[arg(long, default_value_t = 10_000)]
    trials: u64,
    /// Largest row/column count (brute force is factorial, keep it small)
    #[arg(long, default_value_t = 6)]
    max_size: usize,
    /// Costs are drawn from 0..=max_cost
    #[arg(long, default_value_t = 50)]
    max_cost: u32,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Worker threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn random_matrix(rng: &mut SmallRng, max_size: usize, max_cost: u32) -> Vec<Vec<f64>> {
    let rows = rng.gen_range(1..=max_size);
    let cols = rng.gen_range(1..=max_size);
    (0..rows).map(|_| (0..cols).map(|_| rng.gen_range(0..=max_cost) as f64).collect()).collect()
}

/// Cheapest matching of size min(rows, cols) by enumeration.
fn brute_force(cost: &[Vec<f64>]) -> f64 {
    fn go(cost: &[Vec<f64>], row: usize, used: &mut Vec<bool>, left: usize) -> f64 {
        if left == 0 { return 0.0; }
        if row == cost.len() { return f64::INFINITY; }
        // Skipping a row is only allowed when rows outnumber columns.
        let mut best = if cost.len() - row > left { go(cost, row + 1, used, left) } else { f64::INFINITY };
        for j in 0..used.len() {
            if used[j] { continue; }
            used[j] = true;
            best = best.min(cost[row][j] + go(cost, row + 1, used, left - 1));
            used[j] = false;
        }
        best
    }
    let cols = cost[0].len();
    go(cost, 0, &mut vec![false; cols], cost.len().min(cols))
}

fn check(seed: u64, max_size: usize, max_cost: u32) -> Option<Vec<Vec<f64>>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let m = random_matrix(&mut rng, max_size, max_cost);
    let pairs = solve(&m, 0.0);
    let ok = pairs.len() == m.len().min(m[0].len()) && matching_cost(&m, &pairs) == brute_force(&m);
    if ok { None } else { Some(m) }
}

fn main() -> Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.max_size >= 1, "max-size must be at least 1");

    let pb = ProgressBar::new(args.trials);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {per_sec} eta {eta}")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let failures: Vec<Vec<Vec<f64>>> = pool.install(|| {
        (0..args.trials)
            .into_par_iter()
            .filter_map(|i| {
                let r = check(args.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ i, args.max_size, args.max_cost);
                pb.inc(1);
                r
            })
            .collect()
    });
    pb.finish_and_clear();

    println!("trials: {} failures: {} elapsed: {:.3}s", args.trials, failures.len(), t0.elapsed().as_secs_f64());
    for m in failures.iter().take(5) {
        println!("counterexample: {m:?} solver={:?}", solve(m, 0.0));
    }
    anyhow::ensure!(failures.is_empty(), "{} mismatches against brute force", failures.len());
    Ok(())
}
