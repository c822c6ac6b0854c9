//! Session/Auth controller: login flow, forced-password-change gating and
//! token lifecycle. The only component besides the dispatcher that talks to
//! the network.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::providers::device;
use crate::store::SessionStore;

/// Client-side minimum for a new password; shorter values never reach the
/// network.
pub const MIN_PASSWORD_LEN: usize = 8;

/// How a successful login resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    /// The account still uses its issued default password; the caller must
    /// route to the change-password flow, not home. The token is persisted
    /// either way — it is already valid for the change-password call.
    MustChangePassword,
}

pub struct SessionController<'a> {
    api: &'a ApiClient,
    store: &'a mut SessionStore,
}

impl<'a> SessionController<'a> {
    pub fn new(api: &'a ApiClient, store: &'a mut SessionStore) -> Self {
        Self { api, store }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::EmptyCredentials);
        }

        let device_id = device::device_id(self.store)?;

        // On the login call a 401 means bad credentials (or a device the
        // backend refuses), not a stale token.
        let response = match self.api.login(&device_id, username, password).await {
            Err(AppError::Unauthenticated) => Err(AppError::InvalidCredentials),
            other => other,
        }?;

        self.store.set_token(&response.token)?;

        if response.password_default {
            Ok(LoginOutcome::MustChangePassword)
        } else {
            Ok(LoginOutcome::Authenticated)
        }
    }

    pub async fn change_password(&mut self, new_password: &str) -> AppResult<()> {
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let token = self
            .store
            .token()
            .ok_or(AppError::Unauthenticated)?
            .to_string();

        let response = self.api.change_password(&token, new_password).await?;
        if !response.success {
            return Err(AppError::PasswordChangeRejected);
        }
        Ok(())
    }

    /// Drop the persisted token. Idempotent.
    pub fn logout(&mut self) -> AppResult<()> {
        self.store.clear_token()
    }
}
