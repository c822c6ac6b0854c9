//! Wire DTOs for the attendance backend (JSON, camelCase field names).

use crate::errors::{AppError, AppResult};
use crate::models::facts::AttendanceFacts;
use crate::models::profile::Profile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub device_id: String,
    /// True when the account still uses the issued default password and the
    /// user must change it before anything else.
    #[serde(default)]
    pub password_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub active_shift_label: String,
    pub full_name: String,
    #[serde(default)]
    pub allows_break: bool,
}

impl From<ProfileResponse> for Profile {
    fn from(r: ProfileResponse) -> Self {
        Profile {
            username: r.username,
            full_name: r.full_name,
            active_shift: r.active_shift_label,
            allows_break: r.allows_break,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    /// "YYYY-MM-DD".
    pub date: String,
    #[serde(default)]
    pub entry_clocked: bool,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub exit_clocked: bool,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub on_leave: bool,
    #[serde(default)]
    pub leave_kind: Option<String>,
    #[serde(default)]
    pub leave_desc: Option<String>,
    #[serde(default)]
    pub is_holiday: bool,
    #[serde(default)]
    pub holiday_desc: Option<String>,
}

impl TodayResponse {
    pub fn into_facts(self) -> AppResult<AttendanceFacts> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::Decode(format!("bad attendance date '{}'", self.date)))?;
        Ok(AttendanceFacts {
            date,
            entry_clocked: self.entry_clocked,
            entry_time: self.entry_time,
            exit_clocked: self.exit_clocked,
            exit_time: self.exit_time,
            on_leave: self.on_leave,
            leave_kind: self.leave_kind,
            leave_desc: self.leave_desc,
            is_holiday: self.is_holiday,
            holiday_desc: self.holiday_desc,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMovementBody {
    pub movement_kind: String,
    /// "lat,lon" in decimal degrees.
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementResponse {
    pub status: String,
    pub date: String,
    /// Server-assigned "HH:MM".
    pub time: String,
    pub kind: String,
    pub message: String,
    pub full_name: String,
    pub active_shift_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub success: bool,
}
