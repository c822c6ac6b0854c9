//! Attendance reconciliation engine.
//!
//! Pure functions over the data model: no I/O, no clock, no store access.
//! The backend reports entry/exit facts but has no notion of "on break", so
//! the engine combines server truth with the locally persisted state label
//! to recover the `Paused` sub-state. Server facts always win: a persisted
//! label can only turn a backend `Working` into `Paused`, never promote or
//! demote past what the backend reports.

use crate::models::attendance_state::AttendanceState;
use crate::models::facts::AttendanceFacts;
use crate::models::movement::MovementKind;
use crate::utils::time::parse_time;
use chrono::Duration;

/// Derive the authoritative state from today's server facts plus the
/// persisted label.
///
/// Unknown or unparseable labels are treated as absent and the candidate
/// collapses to `Working`.
pub fn derive_state(facts: &AttendanceFacts, persisted_label: Option<&str>) -> AttendanceState {
    if facts.exit_clocked {
        return AttendanceState::Finished;
    }
    if facts.entry_clocked {
        let persisted = persisted_label.and_then(AttendanceState::from_label);
        return if persisted == Some(AttendanceState::Paused) {
            AttendanceState::Paused
        } else {
            AttendanceState::Working
        };
    }
    AttendanceState::NotStarted
}

/// The state a successful movement lands in. Fixed table: each movement kind
/// maps to exactly one resulting state, whatever the origin. Validity of the
/// origin is the dispatcher's concern, checked via [`movement_allowed`].
pub fn next_state(movement: MovementKind) -> AttendanceState {
    match movement {
        MovementKind::Entry | MovementKind::BreakEnd => AttendanceState::Working,
        MovementKind::BreakStart => AttendanceState::Paused,
        MovementKind::Exit => AttendanceState::Finished,
    }
}

/// Whether `movement` may be registered from `current`.
///
/// `breaks_allowed` is the shift-level break permission from the profile;
/// it gates `BreakStart` only.
pub fn movement_allowed(
    current: AttendanceState,
    movement: MovementKind,
    breaks_allowed: bool,
) -> bool {
    match movement {
        MovementKind::Entry => current == AttendanceState::NotStarted,
        MovementKind::BreakStart => current == AttendanceState::Working && breaks_allowed,
        MovementKind::BreakEnd => current == AttendanceState::Paused,
        MovementKind::Exit => {
            current == AttendanceState::Working || current == AttendanceState::Paused
        }
    }
}

/// Wall-clock difference between two "HH:MM" timestamps.
///
/// `None` when either timestamp fails to parse or the exit precedes the
/// entry (odd server data) — the caller renders a placeholder instead of a
/// negative duration.
pub fn worked_duration(entry: &str, exit: &str) -> Option<Duration> {
    let entry = parse_time(entry)?;
    let exit = parse_time(exit)?;
    if exit < entry {
        return None;
    }
    Some(exit - entry)
}
