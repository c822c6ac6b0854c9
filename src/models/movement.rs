use super::coordinates::Coordinates;
use serde::Serialize;
use std::fmt;

/// One discrete attendance action.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MovementKind {
    Entry,
    BreakStart,
    BreakEnd,
    Exit,
}

impl MovementKind {
    /// Convert enum → wire string.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "ENTRY",
            MovementKind::BreakStart => "BREAK_START",
            MovementKind::BreakEnd => "BREAK_END",
            MovementKind::Exit => "EXIT",
        }
    }

    /// Convert wire string → enum.
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "ENTRY" => Some(MovementKind::Entry),
            "BREAK_START" => Some(MovementKind::BreakStart),
            "BREAK_END" => Some(MovementKind::BreakEnd),
            "EXIT" => Some(MovementKind::Exit),
            _ => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, MovementKind::Exit)
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MovementKind::Entry => "clock-in",
            MovementKind::BreakStart => "break start",
            MovementKind::BreakEnd => "break end",
            MovementKind::Exit => "clock-out",
        };
        write!(f, "{}", text)
    }
}

/// A movement about to be registered: the kind plus the coordinates it is
/// geotagged with.
#[derive(Debug, Clone)]
pub struct MovementRequest {
    pub kind: MovementKind,
    pub location: Coordinates,
}

/// What the server answered for a registered movement.
#[derive(Debug, Clone)]
pub struct MovementResult {
    /// Server-assigned time, "HH:MM".
    pub time: String,
    /// Human-readable confirmation from the backend.
    pub message: String,
    /// Echo of the movement kind that was registered.
    pub kind: MovementKind,
}
