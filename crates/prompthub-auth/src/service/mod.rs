//! Pluggable auth collaborator
//!
//! The sign-up and sign-in controllers never talk to the network directly.
//! They go through `AuthService`, which has two implementations:
//!
//! - **Simulated**: waits a fixed delay standing in for a round trip
//! - **HTTP**: JSON over HTTP against a real auth server
//!
//! Tests substitute their own deterministic implementations.

pub mod http;
pub mod simulated;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AuthClientConfig;
use crate::error::AuthError;

pub use http::HttpAuthService;
pub use simulated::SimulatedAuthService;

// ─── WIRE TYPES ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub marketing_agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
}

/// Error payload the HTTP collaborator looks for on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ─── TRAIT ──────────────────────────────────────────────────────────

/// The auth collaborator every controller is built against.
///
/// Implementations must be cheap to share (`Arc<dyn AuthService>`) and
/// must not hold state that assumes one call per step; the sequencer
/// enforces ordering itself.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    async fn check_email(&self, request: &CheckEmailRequest)
        -> Result<CheckEmailResponse, AuthError>;

    async fn send_code(&self, request: &SendCodeRequest) -> Result<SendCodeResponse, AuthError>;

    async fn verify_code(&self, request: &VerifyCodeRequest)
        -> Result<VerifyCodeResponse, AuthError>;

    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, AuthError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError>;
}

/// Shared collaborator type for application state
pub type SharedAuthService = Arc<dyn AuthService>;

/// Build the collaborator selected by `config`: HTTP when a base URL is
/// configured, simulated otherwise.
pub fn from_config(config: &AuthClientConfig) -> Result<SharedAuthService, AuthError> {
    match config.base_url.as_deref() {
        Some(base_url) => {
            log::info!("Using HTTP auth service at {}", base_url);
            Ok(Arc::new(HttpAuthService::new(base_url, config.request_timeout())?))
        }
        None => {
            log::info!(
                "Using simulated auth service ({}ms latency)",
                config.simulated_latency_ms
            );
            Ok(Arc::new(SimulatedAuthService::new(config.simulated_latency())))
        }
    }
}
