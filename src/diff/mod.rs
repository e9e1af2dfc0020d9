//! Position reconciliation: which pieces slid, which appeared, which vanished.

pub mod munkres;

use log::debug;
use std::fmt;

use crate::board::{file_rank, Piece, Position, Square};

/// Padding for the assignment. Larger than any in-bucket distance (7*sqrt(2)*10 < 100).
pub const PAD_COST: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placed {
    pub piece: Piece,
    pub square: Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Moved {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionDiff {
    pub added: Vec<Placed>,
    pub removed: Vec<Placed>,
    pub moved: Vec<Moved>,
}

impl PositionDiff {
    pub fn is_empty(&self) -> bool { self.added.is_empty() && self.removed.is_empty() && self.moved.is_empty() }

    /// Replays the diff on `pos`; `diff(a, b).apply(a) == b`.
    pub fn apply(&self, pos: &Position) -> Position {
        let mut out = pos.clone();
        for r in &self.removed { out.remove(r.square); }
        for m in &self.moved { out.remove(m.from); }
        for m in &self.moved { out.put(m.to, m.piece); }
        for a in &self.added { out.put(a.square, a.piece); }
        out
    }
}

impl fmt::Display for PositionDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.moved { writeln!(f, "move   {} {}-{}", m.piece, m.from, m.to)?; }
        for r in &self.removed { writeln!(f, "remove {} {}", r.piece, r.square)?; }
        for a in &self.added { writeln!(f, "add    {} {}", a.piece, a.square)?; }
        Ok(())
    }
}

/// Visual distance between two squares in tenths of a square, rounded so the
/// solver only ever compares exact values.
pub fn square_distance(a: Square, b: Square) -> f64 {
    let (fa, ra) = file_rank(a);
    let (fb, rb) = file_rank(b);
    let df = fa.abs_diff(fb) as f64;
    let dr = ra.abs_diff(rb) as f64;
    (df.hypot(dr) * 10.0).round()
}

#[inline]
fn bucket(p: Piece) -> usize { p.color as usize * 6 + p.kind as usize }

pub fn diff(old: &Position, new: &Position) -> PositionDiff {
    let mut old_squares: [Vec<Square>; 12] = Default::default();
    let mut new_squares: [Vec<Square>; 12] = Default::default();
    for (sq, p) in old.iter() {
        if new.piece_on(sq) != Some(p) { old_squares[bucket(p)].push(sq); }
    }
    for (sq, p) in new.iter() {
        if old.piece_on(sq) != Some(p) { new_squares[bucket(p)].push(sq); }
    }

    let mut out = PositionDiff::default();
    for (olds, news) in old_squares.iter().zip(new_squares.iter()) {
        let mut old_used = vec![false; olds.len()];
        let mut new_used = vec![false; news.len()];
        if !olds.is_empty() && !news.is_empty() {
            let cost: Vec<Vec<f64>> = olds.iter().map(|&a| news.iter().map(|&b| square_distance(a, b)).collect()).collect();
            for (i, j) in munkres::solve(&cost, PAD_COST) {
                old_used[i] = true;
                new_used[j] = true;
                if let Some(piece) = old.piece_on(olds[i]) {
                    out.moved.push(Moved { piece, from: olds[i], to: news[j] });
                }
            }
        }
        for (&sq, _) in olds.iter().zip(&old_used).filter(|(_, used)| !**used) {
            if let Some(piece) = old.piece_on(sq) { out.removed.push(Placed { piece, square: sq }); }
        }
        for (&sq, _) in news.iter().zip(&new_used).filter(|(_, used)| !**used) {
            if let Some(piece) = new.piece_on(sq) { out.added.push(Placed { piece, square: sq }); }
        }
    }
    debug!("diff: {} moved, {} removed, {} added", out.moved.len(), out.removed.len(), out.added.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_monotone() {
        assert_eq!(square_distance(Square::A1, Square::A1), 0.0);
        assert_eq!(square_distance(Square::A1, Square::H8), square_distance(Square::H8, Square::A1));
        assert!(square_distance(Square::E2, Square::E3) < square_distance(Square::E2, Square::E4));
        assert!(square_distance(Square::A1, Square::H8) < PAD_COST);
    }
}
