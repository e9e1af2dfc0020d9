use cozy_chess::Square;

use crate::board::{coords_to_square, Orientation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionState {
    /// Board is not interactive.
    Default,
    AwaitingInput,
    TouchingFirstSquare { square: Square, x: f32, y: f32 },
    AwaitingSecondTouch { square: Square },
    /// `keyboard` is set when the piece was selected with Enter/Space.
    CancelingSecondTouch { square: Square, x: f32, y: f32, keyboard: bool },
    Dragging { square: Square, keyboard: bool },
    DraggingOutside { square: Square, keyboard: bool },
    MovingPieceKb { square: Square },
}

impl InteractionState {
    pub fn id(&self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::AwaitingInput => "awaiting-input",
            InteractionState::TouchingFirstSquare { .. } => "touching-first-square",
            InteractionState::AwaitingSecondTouch { .. } => "awaiting-second-touch",
            InteractionState::CancelingSecondTouch { .. } => "canceling-second-touch",
            InteractionState::Dragging { .. } => "dragging",
            InteractionState::DraggingOutside { .. } => "dragging-outside",
            InteractionState::MovingPieceKb { .. } => "moving-piece-kb",
        }
    }

    /// Square of the piece being handled, if any.
    pub fn start_square(&self) -> Option<Square> {
        match *self {
            InteractionState::Default | InteractionState::AwaitingInput => None,
            InteractionState::TouchingFirstSquare { square, .. }
            | InteractionState::AwaitingSecondTouch { square }
            | InteractionState::CancelingSecondTouch { square, .. }
            | InteractionState::Dragging { square, .. }
            | InteractionState::DraggingOutside { square, .. }
            | InteractionState::MovingPieceKb { square } => Some(square),
        }
    }

    /// True once `MoveStart` has been announced for the current piece.
    pub fn move_started(&self) -> bool {
        self.start_square().is_some() && !matches!(self, InteractionState::TouchingFirstSquare { .. })
    }
}

/// Everything the transition function reads and writes.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub state: InteractionState,
    /// Roving keyboard focus; also the highlighted candidate during a move.
    pub tabbable: Square,
    /// Restriction installed by the host after `MoveStart`; `None` allows any square.
    pub targets: Option<Vec<Square>>,
}

impl Snapshot {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            state: InteractionState::AwaitingInput,
            tabbable: coords_to_square(0, 0, orientation).unwrap_or(Square::A8),
            targets: None,
        }
    }
}
