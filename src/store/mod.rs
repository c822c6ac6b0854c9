//! Persistent session store: auth token, device identifier, and the
//! last-known attendance-state label, kept across process restarts.
//!
//! One YAML file under the config directory. There is no schema version;
//! a missing or unparseable file loads as an empty store. Every mutation is
//! written through before it returns, because the state label is the sole
//! source of break recovery after a restart.

use crate::errors::{AppError, AppResult};
use crate::models::attendance_state::AttendanceState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    /// Enum name of the last known attendance state, e.g. "PAUSED".
    #[serde(default)]
    pub attendance_state: Option<String>,
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    state: SessionState,
}

impl SessionStore {
    /// Load the store from `path`. Tolerant by contract: no file or a file
    /// that fails to parse yields an empty store, never an error.
    pub fn load(path: PathBuf) -> Self {
        let state = match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("ignoring unparseable session file {:?}: {}", path, e);
                    SessionState::default()
                }
            },
            Err(_) => SessionState::default(),
        };
        Self { path, state }
    }

    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml =
            serde_yaml::to_string(&self.state).map_err(|e| AppError::Store(e.to_string()))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn set_token(&mut self, token: &str) -> AppResult<()> {
        self.state.token = Some(token.to_string());
        self.save()
    }

    pub fn clear_token(&mut self) -> AppResult<()> {
        self.state.token = None;
        self.save()
    }

    pub fn device_id(&self) -> Option<&str> {
        self.state.device_id.as_deref()
    }

    pub fn set_device_id(&mut self, device_id: &str) -> AppResult<()> {
        self.state.device_id = Some(device_id.to_string());
        self.save()
    }

    pub fn state_label(&self) -> Option<&str> {
        self.state.attendance_state.as_deref()
    }

    pub fn set_state_label(&mut self, state: AttendanceState) -> AppResult<()> {
        self.state.attendance_state = Some(state.as_label().to_string());
        self.save()
    }
}
