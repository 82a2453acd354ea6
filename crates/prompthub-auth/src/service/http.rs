//! HTTP auth collaborator
//!
//! POSTs JSON bodies to the auth server endpoints in
//! [`constants::endpoints`](crate::constants::endpoints) and decodes JSON
//! responses. Non-2xx statuses become `AuthError::Status`, carrying the
//! body's `message` field when the server sent one.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    AuthService, CheckEmailRequest, CheckEmailResponse, ErrorBody, SendCodeRequest,
    SendCodeResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    VerifyCodeRequest, VerifyCodeResponse,
};
use crate::constants::endpoints;
use crate::error::AuthError;

pub struct HttpAuthService {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, AuthError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self.http_client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            log::warn!("Auth server returned {} for {}: {}", status, path, message);
            return Err(AuthError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| AuthError::InvalidResponse(format!("{path}: {e}")))
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn check_email(
        &self,
        request: &CheckEmailRequest,
    ) -> Result<CheckEmailResponse, AuthError> {
        self.post(endpoints::CHECK_EMAIL, request).await
    }

    async fn send_code(&self, request: &SendCodeRequest) -> Result<SendCodeResponse, AuthError> {
        self.post(endpoints::SEND_VERIFICATION_CODE, request).await
    }

    async fn verify_code(
        &self,
        request: &VerifyCodeRequest,
    ) -> Result<VerifyCodeResponse, AuthError> {
        self.post(endpoints::VERIFY_CODE, request).await
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, AuthError> {
        self.post(endpoints::SIGN_IN, request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
        self.post(endpoints::SIGN_UP, request).await
    }
}
