use boardcore::diff::munkres::{matching_cost, solve, try_solve};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn m(rows: &[&[f64]]) -> Vec<Vec<f64>> { rows.iter().map(|r| r.to_vec()).collect() }

fn brute_force(cost: &[Vec<f64>]) -> f64 {
    fn go(cost: &[Vec<f64>], row: usize, used: &mut [bool], left: usize) -> f64 {
        if left == 0 { return 0.0; }
        if row == cost.len() { return f64::INFINITY; }
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

#[test]
fn square_6x6_known_answer() {
    let cost = m(&[
        &[99.0, 40.0, 75.0, 81.0, 76.0, 83.0],
        &[74.0, 51.0, 94.0, 55.0, 55.0, 81.0],
        &[34.0, 91.0, 75.0, 25.0, 35.0, 94.0],
        &[7.0, 36.0, 66.0, 55.0, 10.0, 40.0],
        &[83.0, 9.0, 3.0, 8.0, 23.0, 7.0],
        &[64.0, 94.0, 47.0, 89.0, 26.0, 42.0],
    ]);
    let pairs = solve(&cost, 0.0);
    assert_eq!(pairs, vec![(0, 1), (1, 4), (2, 3), (3, 0), (4, 2), (5, 5)]);
    assert_eq!(matching_cost(&cost, &pairs), 172.0);
}

#[test]
fn wide_2x3() {
    let cost = m(&[&[47.0, 68.0, 13.0], &[51.0, 31.0, 70.0]]);
    assert_eq!(solve(&cost, 0.0), vec![(0, 2), (1, 1)]);
}

#[test]
fn tall_3x2_matches_every_column() {
    let cost = m(&[&[10.0, 1.0], &[1.0, 10.0], &[5.0, 5.0]]);
    assert_eq!(solve(&cost, 0.0), vec![(0, 1), (1, 0)]);
}

#[test]
fn empty_inputs() {
    assert!(solve(&[], 0.0).is_empty());
    assert!(solve(&[vec![], vec![]], 0.0).is_empty());
}

#[test]
fn ragged_rows_never_return_missing_cells() {
    // Row 1 has no column 2; a large pad keeps the solver on real cells.
    let cost = m(&[&[5.0, 9.0, 1.0], &[2.0, 4.0]]);
    let pairs = solve(&cost, 100.0);
    assert_eq!(pairs, vec![(0, 2), (1, 0)]);

    // With a zero pad the missing cell is cheapest and gets dropped from the result.
    let cost = m(&[&[5.0, 9.0, 1.0], &[7.0, 8.0]]);
    let pairs = solve(&cost, 0.0);
    assert!(pairs.iter().all(|&(i, j)| j < cost[i].len()));
}

#[test]
fn try_solve_validates_costs() {
    assert!(try_solve(&[vec![1.0, f64::INFINITY]], 0.0).is_err());
    assert_eq!(try_solve(&[vec![3.0, 1.0]], 0.0).unwrap(), vec![(0, 1)]);
}

#[test]
fn random_matrices_are_optimal() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let rows = rng.gen_range(1..=6);
        let cols = rng.gen_range(1..=6);
        let cost: Vec<Vec<f64>> = (0..rows).map(|_| (0..cols).map(|_| rng.gen_range(0..30) as f64).collect()).collect();
        let pairs = solve(&cost, 0.0);
        assert_eq!(pairs.len(), rows.min(cols));
        let mut seen_rows: Vec<usize> = pairs.iter().map(|p| p.0).collect();
        let mut seen_cols: Vec<usize> = pairs.iter().map(|p| p.1).collect();
        seen_rows.dedup();
        seen_cols.sort_unstable();
        seen_cols.dedup();
        assert_eq!(seen_rows.len(), pairs.len(), "repeated row in {pairs:?}");
        assert_eq!(seen_cols.len(), pairs.len(), "repeated column in {pairs:?}");
        assert_eq!(matching_cost(&cost, &pairs), brute_force(&cost), "suboptimal for {cost:?}");
    }
}

#[test]
fn large_matrix_recovers_hidden_permutation() {
    let mut rng = SmallRng::seed_from_u64(11);
    let n = 200;
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        perm.swap(i, rng.gen_range(0..=i));
    }
    let cost: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if j == perm[i] { 0.0 } else { rng.gen_range(1..50) as f64 }).collect())
        .collect();
    let pairs = solve(&cost, 0.0);
    let expected: Vec<(usize, usize)> = perm.iter().copied().enumerate().collect();
    assert_eq!(pairs, expected);
}
