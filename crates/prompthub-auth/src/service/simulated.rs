//! Simulated auth collaborator
//!
//! Stands in for the auth server: every call sleeps a fixed latency and
//! then answers from in-memory rules. By default every email is available,
//! every dispatch succeeds and any non-empty code verifies.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;

use super::{
    AuthService, CheckEmailRequest, CheckEmailResponse, SendCodeRequest, SendCodeResponse,
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, VerifyCodeRequest,
    VerifyCodeResponse,
};
use crate::error::AuthError;

pub struct SimulatedAuthService {
    latency: Duration,
    /// Addresses reported as already registered
    taken_emails: HashSet<String>,
    /// When set, only this code verifies
    expected_code: Option<String>,
    /// When set, every call fails as unreachable
    offline: bool,
}

impl SimulatedAuthService {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            taken_emails: HashSet::new(),
            expected_code: None,
            offline: false,
        }
    }

    /// Report `email` as already registered
    pub fn with_taken_email(mut self, email: impl Into<String>) -> Self {
        self.taken_emails.insert(email.into().to_lowercase());
        self
    }

    /// Only accept `code` during verification
    pub fn with_expected_code(mut self, code: impl Into<String>) -> Self {
        self.expected_code = Some(code.into());
        self
    }

    /// Fail every call as if the server were unreachable
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    async fn round_trip(&self, endpoint: &str) -> Result<(), AuthError> {
        log::debug!("Simulated auth call: {}", endpoint);
        tokio::time::sleep(self.latency).await;
        if self.offline {
            return Err(AuthError::Unavailable(format!(
                "simulated server offline ({endpoint})"
            )));
        }
        Ok(())
    }

    fn is_taken(&self, email: &str) -> bool {
        self.taken_emails.contains(&email.trim().to_lowercase())
    }
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::timing::SIMULATED_LATENCY_MS))
    }
}

#[async_trait]
impl AuthService for SimulatedAuthService {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn check_email(
        &self,
        request: &CheckEmailRequest,
    ) -> Result<CheckEmailResponse, AuthError> {
        self.round_trip("check-email").await?;
        Ok(CheckEmailResponse {
            available: !self.is_taken(&request.email),
        })
    }

    async fn send_code(&self, request: &SendCodeRequest) -> Result<SendCodeResponse, AuthError> {
        self.round_trip("send-verification-code").await?;
        log::debug!("Simulated code dispatch to {}", request.email);
        Ok(SendCodeResponse {
            success: true,
            message: None,
        })
    }

    async fn verify_code(
        &self,
        request: &VerifyCodeRequest,
    ) -> Result<VerifyCodeResponse, AuthError> {
        self.round_trip("verify-code").await?;
        let valid = match &self.expected_code {
            Some(expected) => request.code.trim() == expected,
            None => !request.code.trim().is_empty(),
        };
        Ok(VerifyCodeResponse { valid })
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, AuthError> {
        self.round_trip("login").await?;
        Ok(SignInResponse {
            access_token: format!("simulated-token-{}", request.email.trim().to_lowercase()),
            nickname: None,
        })
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
        self.round_trip("signup").await?;
        if self.is_taken(&request.email) {
            return Err(AuthError::Status {
                status: 409,
                message: "email already registered".to_string(),
            });
        }
        Ok(SignUpResponse {
            user_id: format!("user-{}", request.nickname.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_latency_before_answering() {
        let service = SimulatedAuthService::new(Duration::from_secs(1));
        let started = tokio::time::Instant::now();
        let response = service
            .check_email(&CheckEmailRequest {
                email: "a@b.com".into(),
            })
            .await
            .unwrap();
        assert!(response.available);
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_taken_email_is_case_insensitive() {
        let service = SimulatedAuthService::new(Duration::ZERO).with_taken_email("Neo@Example.com");
        let response = service
            .check_email(&CheckEmailRequest {
                email: "neo@example.com".into(),
            })
            .await
            .unwrap();
        assert!(!response.available);
    }

    #[tokio::test]
    async fn test_expected_code() {
        let service = SimulatedAuthService::new(Duration::ZERO).with_expected_code("123456");
        let request = |code: &str| VerifyCodeRequest {
            email: "a@b.com".into(),
            code: code.into(),
        };
        assert!(service.verify_code(&request("123456")).await.unwrap().valid);
        assert!(!service.verify_code(&request("654321")).await.unwrap().valid);
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let service = SimulatedAuthService::new(Duration::ZERO).offline();
        let result = service
            .send_code(&SendCodeRequest {
                email: "a@b.com".into(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::Unavailable(_))));
    }
}
