//! Pointer / keyboard interaction state machine.

pub mod config;
pub mod event;
pub mod keyboard;
pub mod state;
pub mod transition;

pub use config::InteractionConfig;
pub use event::{parse_script, Effect, InputEvent, Key};
pub use state::{InteractionState, Snapshot};
pub use transition::{step, Transition};

use cozy_chess::Square;
use log::debug;

use crate::board::{Orientation, Piece, Position, Side};

/// Board queries the machine needs from its host.
pub trait BoardView {
    fn piece_on(&self, square: Square) -> Option<Piece>;

    fn is_moveable(&self, square: Square) -> bool { self.piece_on(square).is_some() }

    /// Rendered square width in pixels.
    fn square_width(&self) -> f32;

    /// Veto hook for `MoveFinish`.
    fn accept_finish(&self, _from: Square, _to: Square, _piece: Piece) -> bool { true }

    /// Veto hook for `MoveCancel`.
    fn accept_cancel(&self, _from: Square, _piece: Piece) -> bool { true }
}

/// A position with an optional side to move; used by the command line tools and tests.
#[derive(Clone, Debug)]
pub struct StaticBoard {
    pub position: Position,
    pub turn: Option<Side>,
    pub square_width: f32,
}

impl StaticBoard {
    pub fn new(position: Position) -> Self { Self { position, turn: None, square_width: 60.0 } }
}

impl BoardView for StaticBoard {
    fn piece_on(&self, square: Square) -> Option<Piece> { self.position.piece_on(square) }

    fn is_moveable(&self, square: Square) -> bool {
        match (self.position.piece_on(square), self.turn) {
            (Some(p), Some(turn)) => p.color == turn,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    fn square_width(&self) -> f32 { self.square_width }
}

/// Owns the current snapshot and runs [`step`] on it.
#[derive(Clone, Debug)]
pub struct InteractionMachine {
    snapshot: Snapshot,
    config: InteractionConfig,
}

impl Default for InteractionMachine {
    fn default() -> Self { Self::new(InteractionConfig::default()) }
}

impl InteractionMachine {
    pub fn new(config: InteractionConfig) -> Self { Self { snapshot: Snapshot::new(config.orientation), config } }

    pub fn state(&self) -> InteractionState { self.snapshot.state }

    pub fn state_id(&self) -> &'static str { self.snapshot.state.id() }

    pub fn tabbable(&self) -> Square { self.snapshot.tabbable }

    pub fn targets(&self) -> Option<&[Square]> { self.snapshot.targets.as_deref() }

    pub fn snapshot(&self) -> &Snapshot { &self.snapshot }

    pub fn config(&self) -> &InteractionConfig { &self.config }

    pub fn is_interactive(&self) -> bool { self.snapshot.state != InteractionState::Default }

    pub fn handle<V: BoardView + ?Sized>(&mut self, event: &InputEvent, view: &V) -> Vec<Effect> {
        let t = step(&self.snapshot, event, view, &self.config);
        self.snapshot = t.snapshot;
        t.effects
    }

    /// Restricts where the current move may land. Only meaningful after `MoveStart`.
    pub fn set_targets(&mut self, targets: Option<Vec<Square>>) {
        let Some(from) = self.snapshot.state.start_square().filter(|_| self.snapshot.state.move_started()) else {
            debug!("set_targets ignored in {}", self.state_id());
            return;
        };
        self.snapshot.targets = targets.map(|mut t| {
            t.retain(|&sq| sq != from);
            t
        });
    }

    pub fn set_orientation(&mut self, orientation: Orientation) { self.config.orientation = orientation; }

    /// Turning interaction off cancels any started move without consulting the veto hook.
    pub fn set_interactive<V: BoardView + ?Sized>(&mut self, interactive: bool, view: &V) -> Vec<Effect> {
        let mut effects = Vec::new();
        match (interactive, self.snapshot.state) {
            (true, InteractionState::Default) => self.snapshot.state = InteractionState::AwaitingInput,
            (true, _) => {}
            (false, state) => {
                if let Some(from) = state.start_square().filter(|_| state.move_started()) {
                    if let Some(piece) = view.piece_on(from) { effects.push(Effect::MoveCancel { from, piece }); }
                }
                self.snapshot.state = InteractionState::Default;
                self.snapshot.targets = None;
            }
        }
        effects
    }
}
