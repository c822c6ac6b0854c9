use chrono::NaiveDate;

/// Server-authoritative attendance facts for the current day.
///
/// Re-fetched on every load, never cached. Entry/exit flags and times always
/// win over anything persisted locally; the only thing the backend cannot
/// report is whether the user is currently on a break.
#[derive(Debug, Clone)]
pub struct AttendanceFacts {
    pub date: NaiveDate,
    pub entry_clocked: bool,
    /// "HH:MM", present when `entry_clocked`.
    pub entry_time: Option<String>,
    pub exit_clocked: bool,
    /// "HH:MM", present when `exit_clocked`.
    pub exit_time: Option<String>,
    pub on_leave: bool,
    pub leave_kind: Option<String>,
    pub leave_desc: Option<String>,
    pub is_holiday: bool,
    pub holiday_desc: Option<String>,
}
