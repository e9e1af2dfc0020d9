use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;

use crate::board::{serde_square, Piece, Square};
use crate::error::ScriptError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight | Key::Home | Key::End | Key::PageUp | Key::PageDown
        )
    }

    pub fn is_activation(self) -> bool { matches!(self, Key::Enter | Key::Space) }
}

/// Input vocabulary. `square` is `None` when the pointer or focus is off the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        #[serde(default, with = "serde_square::option")]
        square: Option<Square>,
        x: f32,
        y: f32,
    },
    PointerMove {
        #[serde(default, with = "serde_square::option")]
        square: Option<Square>,
        x: f32,
        y: f32,
    },
    PointerUp {
        #[serde(default, with = "serde_square::option")]
        square: Option<Square>,
        x: f32,
        y: f32,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        ctrl: bool,
    },
    FocusChange {
        #[serde(default, with = "serde_square::option")]
        square: Option<Square>,
    },
    Blur,
}

impl InputEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::PointerDown { .. } => "pointer-down",
            InputEvent::PointerMove { .. } => "pointer-move",
            InputEvent::PointerUp { .. } => "pointer-up",
            InputEvent::KeyDown { .. } => "key-down",
            InputEvent::FocusChange { .. } => "focus-change",
            InputEvent::Blur => "blur",
        }
    }
}

/// Move-lifecycle notifications produced by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    MoveStart { from: Square, piece: Piece },
    MoveFinish { from: Square, to: Square, piece: Piece },
    MoveCancel { from: Square, piece: Piece },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::MoveStart { from, piece } => write!(f, "move-start {piece} {from}"),
            Effect::MoveFinish { from, to, piece } => write!(f, "move-finish {piece} {from}-{to}"),
            Effect::MoveCancel { from, piece } => write!(f, "move-cancel {piece} {from}"),
        }
    }
}

/// Reads one JSON event per line; blank lines and `#` comments are skipped.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let ev = serde_json::from_str(line).map_err(|source| ScriptError::Event { line: i + 1, source })?;
        events.push(ev);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_lines() {
        let text = r#"
# click e2 then e4
{"type":"pointer_down","square":"e2","x":10,"y":10}
{"type":"pointer_up","square":"e2","x":10,"y":10}
{"type":"key_down","key":"ArrowUp"}
{"type":"focus_change","square":null}
{"type":"blur"}
"#;
        let evs = parse_script(text.as_bytes()).unwrap();
        assert_eq!(evs.len(), 5);
        assert_eq!(evs[0], InputEvent::PointerDown { square: Some(Square::E2), x: 10.0, y: 10.0 });
        assert_eq!(evs[2], InputEvent::KeyDown { key: Key::ArrowUp, ctrl: false });
        assert_eq!(evs[3], InputEvent::FocusChange { square: None });
        assert_eq!(evs[4], InputEvent::Blur);
    }

    #[test]
    fn bad_line_reports_number() {
        let text = "{\"type\":\"blur\"}\n{\"type\":\"pointer_down\",\"square\":\"z9\",\"x\":0,\"y\":0}\n";
        match parse_script(text.as_bytes()) {
            Err(ScriptError::Event { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected event error, got {other:?}"),
        }
    }

    #[test]
    fn dom_keys() {
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("PageDown"), Key::PageDown);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }
}
