//! Unified application error type.
//! All modules (api, core, store, cli) return AppError to keep the error
//! handling consistent; every outcome is an explicit result value and nothing
//! retries a mutating call on its own.

use crate::models::attendance_state::AttendanceState;
use crate::models::movement::MovementKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to persist session state: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Transport / backend
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error (status {0})")]
    Server(u16),

    #[error("Malformed server response: {0}")]
    Decode(String),

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username and password are required")]
    EmptyCredentials,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Password change rejected by the server")]
    PasswordChangeRejected,

    // ---------------------------
    // Movement preconditions
    // ---------------------------
    #[error("Location permission denied")]
    LocationPermissionDenied,

    #[error("Current location unavailable")]
    LocationUnavailable,

    #[error("Invalid coordinates '{0}', expected 'lat,lon'")]
    InvalidCoordinates(String),

    #[error("Movement '{movement}' is not allowed while {state}")]
    InvalidMovement {
        state: AttendanceState,
        movement: MovementKind,
    },

    // ---------------------------
    // Home-load orchestration
    // ---------------------------
    #[error("Failed to load profile: {0}")]
    ProfileLoad(#[source] Box<AppError>),

    #[error("Failed to load today's attendance: {0}")]
    AttendanceLoad(#[source] Box<AppError>),
}

pub type AppResult<T> = Result<T, AppError>;
