use cozy_chess::Square;
use serde::{Deserialize, Serialize};

use super::file_rank;

/// Which side is drawn at the bottom of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    White,
    Black,
}

/// Visual (row, col) of a square; row 0 is the top edge.
pub fn square_to_coords(sq: Square, orientation: Orientation) -> (usize, usize) {
    let (file, rank) = file_rank(sq);
    match orientation {
        Orientation::White => (7 - rank, file),
        Orientation::Black => (rank, 7 - file),
    }
}

pub fn coords_to_square(row: usize, col: usize, orientation: Orientation) -> Option<Square> {
    if row > 7 || col > 7 { return None; }
    let (file, rank) = match orientation {
        Orientation::White => (col, 7 - row),
        Orientation::Black => (7 - col, row),
    };
    Some(Square::index(rank * 8 + file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_orientation() {
        assert_eq!(square_to_coords(Square::A8, Orientation::White), (0, 0));
        assert_eq!(square_to_coords(Square::H1, Orientation::White), (7, 7));
        assert_eq!(square_to_coords(Square::H1, Orientation::Black), (0, 0));
        assert_eq!(square_to_coords(Square::A8, Orientation::Black), (7, 7));
    }

    #[test]
    fn coords_roundtrip_all_squares() {
        for o in [Orientation::White, Orientation::Black] {
            for sq in Square::ALL {
                let (r, c) = square_to_coords(sq, o);
                assert_eq!(coords_to_square(r, c, o), Some(sq));
            }
        }
        assert_eq!(coords_to_square(8, 0, Orientation::White), None);
    }
}
