//! The pure transition function: `(snapshot, event) -> (snapshot, effects)`.
//!
//! Every (state, event) pair has an explicit arm; pairs without a reaction are
//! written out as no-ops so adding a state or event fails to compile until it
//! is handled.

use cozy_chess::Square;
use log::{debug, warn};

use super::config::InteractionConfig;
use super::event::{Effect, InputEvent, Key};
use super::keyboard::navigate;
use super::state::{InteractionState as S, Snapshot};
use super::BoardView;
use crate::board::Piece;

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub snapshot: Snapshot,
    pub effects: Vec<Effect>,
}

pub fn step<V: BoardView + ?Sized>(snapshot: &Snapshot, event: &InputEvent, view: &V, config: &InteractionConfig) -> Transition {
    let mut cx = Cx { next: snapshot.clone(), effects: Vec::new(), view, config };
    cx.dispatch(*event);
    if cx.next.state != snapshot.state {
        debug!("{} + {} -> {}", snapshot.state.id(), event.kind(), cx.next.state.id());
    }
    Transition { snapshot: cx.next, effects: cx.effects }
}

struct Cx<'a, V: BoardView + ?Sized> {
    next: Snapshot,
    effects: Vec<Effect>,
    view: &'a V,
    config: &'a InteractionConfig,
}

impl<'a, V: BoardView + ?Sized> Cx<'a, V> {
    fn dispatch(&mut self, event: InputEvent) {
        use InputEvent as E;
        match (self.next.state, event) {
            (S::Default, _) => {}

            (S::AwaitingInput, E::PointerDown { square: Some(sq), x, y }) => self.touch(sq, x, y),
            (S::AwaitingInput, E::PointerDown { square: None, .. }) => {}
            (S::AwaitingInput, E::PointerMove { .. } | E::PointerUp { .. }) => {}
            (S::AwaitingInput, E::KeyDown { key, ctrl }) => self.key_idle(key, ctrl),
            (S::AwaitingInput, E::FocusChange { square }) => self.focus(square),
            (S::AwaitingInput, E::Blur) => {}

            (S::TouchingFirstSquare { square, x: x0, y: y0 }, E::PointerMove { square: over, x, y }) => {
                if self.crossed(square, x0, y0, over, x, y) && self.start_move(square) {
                    self.next.state = drag_state(square, over, false);
                }
            }
            (S::TouchingFirstSquare { square, x: x0, y: y0 }, E::PointerUp { square: over, x, y }) => {
                if !self.start_move(square) { return; }
                if self.crossed(square, x0, y0, over, x, y) {
                    self.drop_piece(square, over, false);
                } else {
                    self.next.state = S::AwaitingSecondTouch { square };
                }
            }
            (S::TouchingFirstSquare { .. }, E::PointerDown { .. } | E::KeyDown { .. }) => {}
            (S::TouchingFirstSquare { .. }, E::FocusChange { square: Some(_) }) => {}
            // Nothing was announced yet, so there is nothing to cancel.
            (S::TouchingFirstSquare { .. }, E::FocusChange { square: None } | E::Blur) => self.next.state = S::AwaitingInput,

            (S::AwaitingSecondTouch { square } | S::MovingPieceKb { square }, E::PointerDown { square: Some(target), x, y }) => {
                if target == square {
                    let keyboard = matches!(self.next.state, S::MovingPieceKb { .. });
                    self.next.state = S::CancelingSecondTouch { square, x, y, keyboard };
                } else if self.is_target(square, target) {
                    self.finish(square, target);
                } else if self.cancel(square) {
                    self.touch(target, x, y);
                }
            }
            (S::AwaitingSecondTouch { square } | S::MovingPieceKb { square }, E::PointerDown { square: None, .. }) => {
                self.cancel(square);
            }
            (S::AwaitingSecondTouch { .. } | S::MovingPieceKb { .. }, E::PointerMove { .. } | E::PointerUp { .. }) => {}
            (S::AwaitingSecondTouch { square } | S::MovingPieceKb { square }, E::KeyDown { key, ctrl }) => {
                self.key_selecting(square, key, ctrl)
            }
            (S::AwaitingSecondTouch { .. } | S::MovingPieceKb { .. }, E::FocusChange { square: Some(sq) }) => self.focus(Some(sq)),
            (S::AwaitingSecondTouch { square } | S::MovingPieceKb { square }, E::FocusChange { square: None } | E::Blur) => {
                self.cancel(square);
            }

            (S::CancelingSecondTouch { square, x: x0, y: y0, keyboard }, E::PointerMove { square: over, x, y }) => {
                if self.crossed(square, x0, y0, over, x, y) { self.next.state = drag_state(square, over, keyboard); }
            }
            (S::CancelingSecondTouch { square, x: x0, y: y0, keyboard }, E::PointerUp { square: over, x, y }) => {
                if self.crossed(square, x0, y0, over, x, y) {
                    self.drop_piece(square, over, keyboard);
                } else {
                    self.cancel_or(square, held(square, keyboard));
                }
            }
            (S::CancelingSecondTouch { .. }, E::PointerDown { .. } | E::KeyDown { .. }) => {}
            (S::CancelingSecondTouch { .. }, E::FocusChange { square: Some(_) }) => {}
            (S::CancelingSecondTouch { square, .. }, E::FocusChange { square: None } | E::Blur) => {
                self.cancel(square);
            }

            (S::Dragging { .. }, E::PointerMove { square: Some(_), .. }) => {}
            (S::Dragging { square, keyboard }, E::PointerMove { square: None, .. }) => {
                self.next.state = S::DraggingOutside { square, keyboard }
            }
            (S::DraggingOutside { square, keyboard }, E::PointerMove { square: Some(_), .. }) => {
                self.next.state = S::Dragging { square, keyboard }
            }
            (S::DraggingOutside { .. }, E::PointerMove { square: None, .. }) => {}
            (S::Dragging { square, keyboard } | S::DraggingOutside { square, keyboard }, E::PointerUp { square: over, .. }) => {
                self.drop_piece(square, over, keyboard)
            }
            (S::Dragging { .. } | S::DraggingOutside { .. }, E::PointerDown { .. } | E::KeyDown { .. }) => {}
            (S::Dragging { .. } | S::DraggingOutside { .. }, E::FocusChange { square: Some(_) }) => {}
            (S::Dragging { square, .. } | S::DraggingOutside { square, .. }, E::FocusChange { square: None } | E::Blur) => {
                self.cancel(square);
            }
        }
    }

    fn crossed(&self, start: Square, x0: f32, y0: f32, over: Option<Square>, x: f32, y: f32) -> bool {
        over != Some(start) || (x - x0).hypot(y - y0) > self.config.drag_threshold(self.view.square_width())
    }

    fn is_target(&self, from: Square, to: Square) -> bool {
        to != from && self.next.targets.as_ref().map_or(true, |t| t.contains(&to))
    }

    fn focus(&mut self, square: Option<Square>) {
        if let Some(sq) = square { self.next.tabbable = sq; }
    }

    fn touch(&mut self, sq: Square, x: f32, y: f32) {
        if self.view.piece_on(sq).is_some() && self.view.is_moveable(sq) {
            self.next.state = S::TouchingFirstSquare { square: sq, x, y };
            self.next.tabbable = sq;
        }
    }

    /// Piece on the start square; a vanished piece drops the move without notifications.
    fn piece(&mut self, from: Square) -> Option<Piece> {
        let piece = self.view.piece_on(from);
        if piece.is_none() {
            warn!("no piece on {from} any more, dropping move");
            self.reset();
        }
        piece
    }

    fn reset(&mut self) {
        self.next.state = S::AwaitingInput;
        self.next.targets = None;
    }

    fn start_move(&mut self, from: Square) -> bool {
        let Some(piece) = self.piece(from) else { return false };
        self.next.targets = None;
        self.effects.push(Effect::MoveStart { from, piece });
        true
    }

    /// Finishes `from -> to`; a vetoed finish is treated as a cancel request
    /// that falls back to `fallback` if it is vetoed as well.
    fn finish_or(&mut self, from: Square, to: Square, fallback: S) {
        debug_assert_ne!(from, to, "finish onto the start square");
        let Some(piece) = self.piece(from) else { return };
        if self.view.accept_finish(from, to, piece) {
            self.effects.push(Effect::MoveFinish { from, to, piece });
            self.reset();
            self.next.tabbable = to;
        } else {
            warn!("move {from}-{to} vetoed");
            self.cancel_or(from, fallback);
        }
    }

    fn finish(&mut self, from: Square, to: Square) {
        let current = self.next.state;
        self.finish_or(from, to, current);
    }

    /// Returns true if the move was cancelled.
    fn cancel_or(&mut self, from: Square, fallback: S) -> bool {
        let Some(piece) = self.piece(from) else { return true };
        if self.view.accept_cancel(from, piece) {
            self.effects.push(Effect::MoveCancel { from, piece });
            self.reset();
            true
        } else {
            warn!("cancel of {from} vetoed, staying in {}", fallback.id());
            self.next.state = fallback;
            false
        }
    }

    fn cancel(&mut self, from: Square) -> bool {
        let current = self.next.state;
        self.cancel_or(from, current)
    }

    /// Release of a dragged piece over `over`. A vetoed outcome leaves the
    /// piece selected the way it was picked up.
    fn drop_piece(&mut self, from: Square, over: Option<Square>, keyboard: bool) {
        let released = held(from, keyboard);
        match over {
            Some(to) if self.is_target(from, to) => self.finish_or(from, to, released),
            _ => {
                self.cancel_or(from, released);
            }
        }
    }

    fn key_idle(&mut self, key: Key, ctrl: bool) {
        if key.is_activation() {
            let sq = self.next.tabbable;
            if self.view.piece_on(sq).is_some() && self.view.is_moveable(sq) && self.start_move(sq) {
                self.next.state = S::MovingPieceKb { square: sq };
            }
        } else if let Some(sq) = navigate(self.next.tabbable, key, ctrl, self.config.orientation) {
            self.next.tabbable = sq;
        }
    }

    fn key_selecting(&mut self, from: Square, key: Key, ctrl: bool) {
        match key {
            Key::Enter | Key::Space => {
                let to = self.next.tabbable;
                if to == from {
                    self.cancel(from);
                } else if self.is_target(from, to) {
                    self.finish(from, to);
                }
            }
            Key::Escape => {
                self.cancel(from);
            }
            k if k.is_navigation() => {
                if let Some(sq) = navigate(self.next.tabbable, k, ctrl, self.config.orientation) {
                    self.next.tabbable = sq;
                }
            }
            _ => {}
        }
    }
}

fn drag_state(square: Square, over: Option<Square>, keyboard: bool) -> S {
    if over.is_some() { S::Dragging { square, keyboard } } else { S::DraggingOutside { square, keyboard } }
}

/// Selection a released piece falls back to.
fn held(square: Square, keyboard: bool) -> S {
    if keyboard { S::MovingPieceKb { square } } else { S::AwaitingSecondTouch { square } }
}
