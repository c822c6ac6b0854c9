//! Typed bindings to the five backend operations, over a pluggable
//! transport. Pure I/O boundary: status codes map mechanically onto the
//! error taxonomy (401 ⇒ `Unauthenticated`, other non-2xx ⇒ `Server`,
//! connectivity/timeout ⇒ `Network`) and no call is ever retried here.

pub mod models;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use self::models::{
    ChangePasswordBody, ChangePasswordResponse, LoginBody, LoginResponse, MovementResponse,
    ProfileResponse, RegisterMovementBody, TodayResponse,
};

/// Header carrying the stable device identifier on login and movement calls.
pub const DEVICE_ID_HEADER: &str = "X-Device-ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One backend request, transport-agnostic.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub bearer: Option<String>,
    pub device_id: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Status + raw body, before any decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The HTTP seam. Production uses [`ReqwestTransport`]; tests script
/// responses and record the requests they received.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: ApiRequest) -> AppResult<RawResponse>;
}

/// reqwest-backed transport. Owns timeout policy; every transport-level
/// failure (connect, timeout, TLS) surfaces as `Network`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, req: ApiRequest) -> AppResult<RawResponse> {
        if self.base_url.is_empty() {
            return Err(AppError::Config(
                "base_url is not set; run `enturno config --init --url <URL>`".to_string(),
            ));
        }

        let url = format!("{}/{}", self.base_url, req.path);
        let mut builder = match req.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(device_id) = &req.device_id {
            builder = builder.header(DEVICE_ID_HEADER, device_id);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        log::debug!("{:?} {} -> {}", req.method, url, status);
        Ok(RawResponse { status, body })
    }
}

/// Typed client over the transport seam.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    async fn request<T: DeserializeOwned>(&self, req: ApiRequest) -> AppResult<T> {
        let raw = self.transport.send(req).await?;
        match raw.status {
            200..=299 => {
                serde_json::from_str(&raw.body).map_err(|e| AppError::Decode(e.to_string()))
            }
            401 => Err(AppError::Unauthenticated),
            status => Err(AppError::Server(status)),
        }
    }

    pub async fn login(
        &self,
        device_id: &str,
        username: &str,
        password: &str,
    ) -> AppResult<LoginResponse> {
        let body = LoginBody {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.request(ApiRequest {
            method: Method::Post,
            path: "auth/login",
            bearer: None,
            device_id: Some(device_id.to_string()),
            body: Some(serde_json::to_value(body).map_err(|e| AppError::Decode(e.to_string()))?),
        })
        .await
    }

    pub async fn get_profile(&self, token: &str) -> AppResult<ProfileResponse> {
        self.request(ApiRequest {
            method: Method::Get,
            path: "auth/me",
            bearer: Some(token.to_string()),
            device_id: None,
            body: None,
        })
        .await
    }

    pub async fn get_today_attendance(&self, token: &str) -> AppResult<TodayResponse> {
        self.request(ApiRequest {
            method: Method::Get,
            path: "attendance/today",
            bearer: Some(token.to_string()),
            device_id: None,
            body: None,
        })
        .await
    }

    pub async fn register_movement(
        &self,
        token: &str,
        device_id: &str,
        body: RegisterMovementBody,
    ) -> AppResult<MovementResponse> {
        self.request(ApiRequest {
            method: Method::Post,
            path: "attendance",
            bearer: Some(token.to_string()),
            device_id: Some(device_id.to_string()),
            body: Some(serde_json::to_value(body).map_err(|e| AppError::Decode(e.to_string()))?),
        })
        .await
    }

    pub async fn change_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> AppResult<ChangePasswordResponse> {
        let body = ChangePasswordBody {
            new_password: new_password.to_string(),
        };
        self.request(ApiRequest {
            method: Method::Post,
            path: "auth/change-password",
            bearer: Some(token.to_string()),
            device_id: None,
            body: Some(serde_json::to_value(body).map_err(|e| AppError::Decode(e.to_string()))?),
        })
        .await
    }
}
