use serde::Serialize;
use std::fmt;

/// Where the user stands in today's shift.
///
/// Transitions are monotonic within a day except for the
/// `Working` ↔ `Paused` oscillation; `Finished` is terminal.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceState {
    NotStarted,
    Working,
    Paused,
    Finished,
}

impl AttendanceState {
    /// Convert enum → persisted label.
    pub fn as_label(&self) -> &'static str {
        match self {
            AttendanceState::NotStarted => "NOT_STARTED",
            AttendanceState::Working => "WORKING",
            AttendanceState::Paused => "PAUSED",
            AttendanceState::Finished => "FINISHED",
        }
    }

    /// Convert persisted label → enum. Unknown labels are `None`: old or
    /// foreign values fall back to server truth instead of failing the load.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "NOT_STARTED" => Some(AttendanceState::NotStarted),
            "WORKING" => Some(AttendanceState::Working),
            "PAUSED" => Some(AttendanceState::Paused),
            "FINISHED" => Some(AttendanceState::Finished),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, AttendanceState::Finished)
    }

    pub fn is_on_break(&self) -> bool {
        matches!(self, AttendanceState::Paused)
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AttendanceState::NotStarted => "not started",
            AttendanceState::Working => "working",
            AttendanceState::Paused => "on break",
            AttendanceState::Finished => "finished",
        };
        write!(f, "{}", text)
    }
}
