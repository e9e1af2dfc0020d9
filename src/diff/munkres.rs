//! Rectangular minimum-cost assignment (Hungarian / Munkres).
//!
//! The matrix is padded to n x n, then the classic six steps run as an explicit
//! `Step` machine over owned cover and mark arrays. Step 6 never touches the
//! matrix: it shifts row and column potentials, and each uncovered row keeps
//! its smallest uncovered reduced cost, so the whole run is O(n^3).

use log::trace;

use crate::error::AssignError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    None,
    Star,
    Prime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    StarZeros,
    CoverStarred,
    PrimeZeros,
    AugmentPath { row: usize, col: usize },
    AdjustWeights,
    Done,
}

struct Munkres {
    n: usize,
    c: Vec<f64>,
    /// Added to every cell of the row.
    row_pot: Vec<f64>,
    /// Subtracted from every cell of the column.
    col_pot: Vec<f64>,
    marks: Vec<Mark>,
    star_of_row: Vec<Option<usize>>,
    star_of_col: Vec<Option<usize>>,
    row_covered: Vec<bool>,
    col_covered: Vec<bool>,
    /// Per uncovered row: smallest reduced cost over uncovered columns, and its column.
    slack: Vec<(f64, usize)>,
    path: Vec<(usize, usize)>,
}

impl Munkres {
    fn new(cost: &[Vec<f64>], pad_value: f64, n: usize) -> Self {
        let mut c = vec![pad_value; n * n];
        for (i, row) in cost.iter().enumerate() {
            c[i * n..i * n + row.len()].copy_from_slice(row);
        }
        Self {
            n,
            c,
            row_pot: vec![0.0; n],
            col_pot: vec![0.0; n],
            marks: vec![Mark::None; n * n],
            star_of_row: vec![None; n],
            star_of_col: vec![None; n],
            row_covered: vec![false; n],
            col_covered: vec![false; n],
            slack: vec![(f64::INFINITY, 0); n],
            path: Vec::with_capacity(2 * n + 1),
        }
    }

    /// Reduced cost of a cell.
    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 { self.c[i * self.n + j] + self.row_pot[i] - self.col_pot[j] }

    #[inline]
    fn mark(&self, i: usize, j: usize) -> Mark { self.marks[i * self.n + j] }

    #[inline]
    fn set_mark(&mut self, i: usize, j: usize, m: Mark) { self.marks[i * self.n + j] = m; }

    fn star(&mut self, i: usize, j: usize) {
        self.set_mark(i, j, Mark::Star);
        self.star_of_row[i] = Some(j);
        self.star_of_col[j] = Some(i);
    }

    fn run(&mut self) {
        self.reduce_rows();
        let mut step = Step::StarZeros;
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            step = match step {
                Step::StarZeros => self.star_zeros(),
                Step::CoverStarred => self.cover_starred(),
                Step::PrimeZeros => self.prime_zeros(),
                Step::AugmentPath { row, col } => self.augment_path(row, col),
                Step::AdjustWeights => self.adjust_weights(),
                Step::Done => break,
            };
        }
        trace!("munkres: n={} finished after {} steps", self.n, iterations);
    }

    // Step 1
    fn reduce_rows(&mut self) {
        let n = self.n;
        for row in self.c.chunks_mut(n) {
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            for v in row.iter_mut() { *v -= min; }
        }
    }

    // Step 2
    fn star_zeros(&mut self) -> Step {
        for i in 0..self.n {
            for j in 0..self.n {
                if self.at(i, j) == 0.0 && !self.row_covered[i] && !self.col_covered[j] {
                    self.star(i, j);
                    self.row_covered[i] = true;
                    self.col_covered[j] = true;
                    break;
                }
            }
        }
        self.clear_covers();
        Step::CoverStarred
    }

    // Step 3
    fn cover_starred(&mut self) -> Step {
        let mut covered = 0;
        for j in 0..self.n {
            if self.star_of_col[j].is_some() {
                self.col_covered[j] = true;
                covered += 1;
            }
        }
        if covered >= self.n { return Step::Done; }
        for i in 0..self.n {
            let mut best = (f64::INFINITY, 0);
            for j in 0..self.n {
                if self.col_covered[j] { continue; }
                let v = self.at(i, j);
                if v < best.0 { best = (v, j); }
            }
            self.slack[i] = best;
        }
        Step::PrimeZeros
    }

    // Step 4
    fn prime_zeros(&mut self) -> Step {
        loop {
            let Some(row) = (0..self.n).find(|&i| !self.row_covered[i] && self.slack[i].0 <= 0.0) else {
                return Step::AdjustWeights;
            };
            let col = self.slack[row].1;
            self.set_mark(row, col, Mark::Prime);
            let Some(star_col) = self.star_of_row[row] else { return Step::AugmentPath { row, col } };
            self.row_covered[row] = true;
            self.col_covered[star_col] = false;
            for i in 0..self.n {
                if self.row_covered[i] { continue; }
                let v = self.at(i, star_col);
                if v < self.slack[i].0 { self.slack[i] = (v, star_col); }
            }
        }
    }

    // Step 5
    fn augment_path(&mut self, row: usize, col: usize) -> Step {
        self.path.clear();
        self.path.push((row, col));
        loop {
            let (_, c) = self.path[self.path.len() - 1];
            let Some(r) = self.star_of_col[c] else { break };
            self.path.push((r, c));
            // A starred zero reached from a prime always has a prime in its row.
            let Some(p) = self.prime_in_row(r) else { break };
            self.path.push((r, p));
        }
        // Odd entries are stars; unstar them all before starring the primes.
        for k in (1..self.path.len()).step_by(2) {
            let (i, j) = self.path[k];
            self.set_mark(i, j, Mark::None);
            self.star_of_row[i] = None;
            self.star_of_col[j] = None;
        }
        for k in (0..self.path.len()).step_by(2) {
            let (i, j) = self.path[k];
            self.star(i, j);
        }
        self.clear_covers();
        for m in self.marks.iter_mut() {
            if *m == Mark::Prime { *m = Mark::None; }
        }
        Step::CoverStarred
    }

    // Step 6
    fn adjust_weights(&mut self) -> Step {
        let min = (0..self.n)
            .filter(|&i| !self.row_covered[i])
            .map(|i| self.slack[i].0)
            .fold(f64::INFINITY, f64::min);
        debug_assert!(min.is_finite(), "step 6 found no uncovered cell");
        for i in 0..self.n {
            if self.row_covered[i] {
                self.row_pot[i] += min;
            } else {
                self.slack[i].0 -= min;
            }
        }
        for j in 0..self.n {
            if !self.col_covered[j] { self.col_pot[j] += min; }
        }
        Step::PrimeZeros
    }

    fn prime_in_row(&self, i: usize) -> Option<usize> { (0..self.n).find(|&j| self.mark(i, j) == Mark::Prime) }

    fn clear_covers(&mut self) {
        self.row_covered.fill(false);
        self.col_covered.fill(false);
    }
}

/// Minimum-cost matching of rows to columns.
///
/// Rows may be ragged; missing cells count as `pad_value` and are never
/// returned. Pairs come back sorted by row. Costs must be finite and
/// nonnegative (checked in debug builds, see [`try_solve`]).
pub fn solve(cost: &[Vec<f64>], pad_value: f64) -> Vec<(usize, usize)> {
    let rows = cost.len();
    let cols = cost.iter().map(Vec::len).max().unwrap_or(0);
    if rows == 0 || cols == 0 { return Vec::new(); }
    debug_assert!(pad_value.is_finite() && pad_value >= 0.0, "bad pad value {pad_value}");
    debug_assert!(
        cost.iter().flatten().all(|v| v.is_finite() && *v >= 0.0),
        "costs must be finite and nonnegative"
    );

    let n = rows.max(cols);
    let mut m = Munkres::new(cost, pad_value, n);
    m.run();

    let mut pairs = Vec::with_capacity(rows.min(cols));
    for (i, row) in cost.iter().enumerate() {
        if let Some(j) = m.star_of_row[i] {
            if j < row.len() { pairs.push((i, j)); }
        }
    }
    pairs
}

/// Like [`solve`], but rejects negative or non-finite input instead of assuming it away.
pub fn try_solve(cost: &[Vec<f64>], pad_value: f64) -> Result<Vec<(usize, usize)>, AssignError> {
    if !(pad_value.is_finite() && pad_value >= 0.0) { return Err(AssignError::InvalidPad(pad_value)); }
    for (row, values) in cost.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if !(value.is_finite() && value >= 0.0) { return Err(AssignError::InvalidCost { row, col, value }); }
        }
    }
    Ok(solve(cost, pad_value))
}

/// Sum of the selected cells. Pairs outside the matrix, including ragged gaps, count as zero.
pub fn matching_cost(cost: &[Vec<f64>], pairs: &[(usize, usize)]) -> f64 {
    pairs.iter().filter_map(|&(i, j)| cost.get(i)?.get(j)).sum()
}
