#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use enturno::api::{ApiClient, ApiRequest, HttpTransport, RawResponse};
use enturno::errors::{AppError, AppResult};
use enturno::store::SessionStore;

pub fn ent() -> Command {
    cargo_bin_cmd!("enturno")
}

/// Create a unique, empty config dir inside the system temp dir.
pub fn setup_config_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_enturno", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test config dir");
    path
}

/// A session store backed by a unique temp file.
pub fn setup_store(name: &str) -> SessionStore {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_enturno_session.yaml", name));
    fs::remove_file(&path).ok();
    SessionStore::load(path)
}

/// Scripted transport: hands out queued responses in order and records every
/// request it receives, so tests can assert what did (or did not) reach the
/// network.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<AppResult<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_err(&self, err: AppError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request_paths(&self) -> Vec<&'static str> {
        self.requests.lock().unwrap().iter().map(|r| r.path).collect()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, req: ApiRequest) -> AppResult<RawResponse> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted response left".to_string())))
    }
}

/// Client + transport pair wired together for controller-level tests.
pub fn scripted_client() -> (ApiClient, std::sync::Arc<ScriptedTransport>) {
    let transport = std::sync::Arc::new(ScriptedTransport::new());
    let api = ApiClient::new(transport.clone());
    (api, transport)
}

// ---------------------------------------------------------------------------
// Canned backend bodies
// ---------------------------------------------------------------------------

pub fn login_body(token: &str, password_default: bool) -> String {
    serde_json::json!({
        "token": token,
        "username": "jdoe",
        "deviceId": "dev-1",
        "passwordDefault": password_default,
    })
    .to_string()
}

pub fn profile_body(allows_break: bool) -> String {
    serde_json::json!({
        "username": "jdoe",
        "activeShiftLabel": "Morning 08-16",
        "fullName": "Jane Doe",
        "allowsBreak": allows_break,
    })
    .to_string()
}

pub fn today_body(entry: Option<&str>, exit: Option<&str>) -> String {
    serde_json::json!({
        "date": "2026-08-06",
        "entryClocked": entry.is_some(),
        "entryTime": entry,
        "exitClocked": exit.is_some(),
        "exitTime": exit,
        "onLeave": false,
        "isHoliday": false,
    })
    .to_string()
}

pub fn movement_body(kind: &str, time: &str) -> String {
    serde_json::json!({
        "status": "OK",
        "date": "2026-08-06",
        "time": time,
        "kind": kind,
        "message": "Registered",
        "fullName": "Jane Doe",
        "activeShiftLabel": "Morning 08-16",
    })
    .to_string()
}
