use cozy_chess::{Board as CozyBoard, Color, Piece as PieceKind, Square};
use std::fmt;

use super::square_index;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self { Self { kind, color } }

    /// FEN letter: uppercase for white.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if self.color == Color::White { c.to_ascii_uppercase() } else { c }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.to_char()) }
}

/// Square -> piece table. One slot per square, so a square never holds two pieces.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; 64],
}

impl Default for Position {
    fn default() -> Self { Self::empty() }
}

impl Position {
    pub fn empty() -> Self { Self { squares: [None; 64] } }

    pub fn startpos() -> Self { Self::from_board(&CozyBoard::default()) }

    pub fn from_board(board: &CozyBoard) -> Self {
        let mut pos = Self::empty();
        for sq in board.occupied() {
            if let Some((kind, color)) = board.piece_on(sq).zip(board.color_on(sq)) {
                pos.put(sq, Piece::new(kind, color));
            }
        }
        pos
    }

    /// Accepts a full FEN or just its placement field.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let fen = fen.trim();
        let full = if fen.split_whitespace().count() == 1 { format!("{fen} w - - 0 1") } else { fen.to_string() };
        CozyBoard::from_fen(&full, false).map(|b| Self::from_board(&b)).map_err(|e| format!("FEN error: {e:?}"))
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> { self.squares[square_index(sq)] }

    /// Places a piece, returning whatever it replaced.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[square_index(sq)].replace(piece)
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> { self.squares[square_index(sq)].take() }

    /// Occupied squares in a1, b1, ..., h8 order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL.into_iter().filter_map(move |sq| self.piece_on(sq).map(|p| (sq, p)))
    }

    pub fn len(&self) -> usize { self.squares.iter().filter(|s| s.is_some()).count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl FromIterator<(Square, Piece)> for Position {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        let mut pos = Self::empty();
        for (sq, p) in iter { pos.put(sq, p); }
        pos
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(sq, p)| (sq.to_string(), p.to_char()))).finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = self.squares[rank * 8 + file].map(Piece::to_char).unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_has_32_pieces() {
        let p = Position::startpos();
        assert_eq!(p.len(), 32);
        assert_eq!(p.piece_on(Square::E1), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(p.piece_on(Square::D8), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(p.piece_on(Square::E4), None);
    }

    #[test]
    fn placement_only_fen() {
        let p = Position::from_fen("4k3/8/8/8/8/8/8/4K3").expect("valid placement");
        assert_eq!(p.len(), 2);
        assert_eq!(p.piece_on(Square::E8).map(|p| p.kind), Some(PieceKind::King));
    }
}
