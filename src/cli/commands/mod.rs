pub mod config;
pub mod device;
pub mod login;
pub mod logout;
pub mod passwd;
pub mod punch;
pub mod status;

use crate::errors::{AppError, AppResult};

/// Hidden-input prompt shared by `login` and `passwd`.
pub(crate) fn prompt_password(prompt: &str) -> AppResult<String> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}
