pub mod coords;
pub mod position;

pub use coords::{coords_to_square, square_to_coords, Orientation};
pub use cozy_chess::{Color as Side, Piece as PieceKind, Square};
pub use position::{Piece, Position};

#[inline]
pub fn square_index(sq: Square) -> usize { sq as usize }

/// (file, rank), both 0..8.
#[inline]
pub fn file_rank(sq: Square) -> (usize, usize) {
    let i = square_index(sq);
    (i % 8, i / 8)
}

/// Serde adapters writing squares as their "e2" labels.
pub mod serde_square {
    use cozy_chess::Square;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(sq: &Square, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(sq)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Square, D::Error> {
        let s = String::deserialize(d)?;
        s.parse::<Square>().map_err(|_| D::Error::custom(format!("invalid square: {s}")))
    }

    pub mod option {
        use cozy_chess::Square;
        use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(sq: &Option<Square>, s: S) -> Result<S::Ok, S::Error> {
            match sq {
                Some(sq) => s.collect_str(sq),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Square>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(s) => s.parse::<Square>().map(Some).map_err(|_| D::Error::custom(format!("invalid square: {s}"))),
                None => Ok(None),
            }
        }
    }
}
