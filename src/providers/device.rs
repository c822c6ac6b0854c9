//! Stable device identifier.
//!
//! The backend binds sessions to installations through this value, so once
//! generated it must never change. Resolution order: persisted store, then a
//! platform machine identifier, then a random UUID — and whichever value is
//! used is persisted immediately.

use crate::errors::AppResult;
use crate::store::SessionStore;
use std::fs;
use uuid::Uuid;

/// Resolve (and persist, if freshly chosen) the device identifier.
pub fn device_id(store: &mut SessionStore) -> AppResult<String> {
    resolve_device_id(store, platform_machine_id())
}

/// Resolution with the platform identifier injected, so the fallback ladder
/// is testable without touching the host machine.
pub fn resolve_device_id(
    store: &mut SessionStore,
    platform_id: Option<String>,
) -> AppResult<String> {
    if let Some(id) = store.device_id() {
        return Ok(id.to_string());
    }

    let id = platform_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    store.set_device_id(&id)?;
    Ok(id)
}

/// A stable machine identifier, where the platform offers one.
fn platform_machine_id() -> Option<String> {
    for path in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
        if let Ok(content) = fs::read_to_string(path) {
            let id = content.trim().to_string();
            if !id.is_empty() {
                return Some(id);
            }
        }
    }
    None
}
