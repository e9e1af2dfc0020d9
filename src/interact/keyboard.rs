use cozy_chess::Square;

use super::event::Key;
use crate::board::{coords_to_square, square_to_coords, Orientation};

/// Where the roving focus goes for a navigation key; `None` for other keys.
/// Arithmetic is on visual rows/columns, clamped to the board.
pub fn navigate(from: Square, key: Key, ctrl: bool, orientation: Orientation) -> Option<Square> {
    let (row, col) = square_to_coords(from, orientation);
    let (r, c) = match key {
        Key::ArrowUp => (row.saturating_sub(1), col),
        Key::ArrowDown => ((row + 1).min(7), col),
        Key::ArrowLeft => (row, col.saturating_sub(1)),
        Key::ArrowRight => (row, (col + 1).min(7)),
        Key::Home if ctrl => (0, 0),
        Key::Home => (row, 0),
        Key::End if ctrl => (7, 7),
        Key::End => (row, 7),
        Key::PageUp => (0, col),
        Key::PageDown => (7, col),
        Key::Enter | Key::Space | Key::Escape | Key::Other => return None,
    };
    coords_to_square(r, c, orientation)
}
