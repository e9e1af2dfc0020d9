// Board interaction state machine + position reconciliation
pub mod board;
pub mod diff;
pub mod error;
pub mod interact;

pub use board::{Orientation, Piece, PieceKind, Position, Side, Square};
pub use diff::{diff, PositionDiff};
pub use interact::{BoardView, Effect, InputEvent, InteractionMachine, InteractionState};
