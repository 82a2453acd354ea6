//! Error types for the auth library

use prompthub_forms::FieldErrors;
use thiserror::Error;

use crate::constants::messages;
use crate::form::{SignInField, SignUpField};

/// Failures of the auth collaborator itself
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// The sequencer step a request or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStep {
    CheckEmail,
    SendCode,
    VerifyCode,
}

impl std::fmt::Display for VerificationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CheckEmail => "check-email",
            Self::SendCode => "send-code",
            Self::VerifyCode => "verify-code",
        };
        f.write_str(name)
    }
}

/// Precondition and step failures of the verification sequencer.
///
/// None of these are fatal: every variant maps to an inline message on a
/// sign-up field, and the triggering action may be retried.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Email is not a valid address")]
    EmailInvalid,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Email availability has not been confirmed")]
    EmailNotChecked,

    #[error("Verification code is required")]
    CodeRequired,

    #[error("No verification code has been sent")]
    CodeNotSent,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Verification code does not match")]
    CodeMismatch,

    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("A {0} request is already pending")]
    Busy(VerificationStep),

    #[error("Code dispatch rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    SendRejected(Option<String>),

    #[error("{step} response discarded after reset")]
    Stale { step: VerificationStep },

    #[error("{step} failed: {source}")]
    Service {
        step: VerificationStep,
        #[source]
        source: AuthError,
    },
}

impl VerificationError {
    pub fn service(step: VerificationStep, source: AuthError) -> Self {
        Self::Service { step, source }
    }

    /// The sign-up field this failure is shown next to
    pub fn field(&self) -> SignUpField {
        match self {
            Self::EmailRequired
            | Self::EmailInvalid
            | Self::EmailTaken
            | Self::EmailNotChecked => SignUpField::Email,
            Self::Busy(VerificationStep::CheckEmail)
            | Self::Stale {
                step: VerificationStep::CheckEmail,
            }
            | Self::Service {
                step: VerificationStep::CheckEmail,
                ..
            } => SignUpField::Email,
            _ => SignUpField::VerificationCode,
        }
    }

    /// Inline message for the field returned by [`field`](Self::field)
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::EmailRequired => messages::EMAIL_REQUIRED,
            Self::EmailInvalid => messages::EMAIL_INVALID,
            Self::EmailTaken => messages::EMAIL_TAKEN,
            Self::EmailNotChecked => messages::EMAIL_NOT_CHECKED,
            Self::CodeRequired => messages::CODE_REQUIRED,
            Self::CodeNotSent => messages::CODE_NOT_SENT,
            Self::CodeExpired => messages::CODE_EXPIRED,
            Self::CodeMismatch => messages::CODE_MISMATCH,
            Self::AlreadyVerified => messages::ALREADY_VERIFIED,
            Self::Busy(_) | Self::Stale { .. } => messages::STEP_PENDING,
            Self::SendRejected(Some(reason)) => return reason.clone(),
            Self::SendRejected(None) => messages::SEND_CODE_FAILED,
            Self::Service { step, .. } => match step {
                VerificationStep::CheckEmail => messages::EMAIL_CHECK_FAILED,
                VerificationStep::SendCode => messages::SEND_CODE_FAILED,
                VerificationStep::VerifyCode => messages::CODE_VERIFY_FAILED,
            },
        };
        message.to_string()
    }

    /// Whether the failure came from the collaborator rather than a local check
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::SendRejected(_))
    }
}

/// Sign-up submission failures
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Sign-up form has invalid fields: {0}")]
    Invalid(FieldErrors<SignUpField>),

    #[error("Sign-up request failed: {0}")]
    Service(#[from] AuthError),
}

impl SubmitError {
    /// Banner message for a failure not tied to a single field
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(_) => None,
            Self::Service(_) => Some(messages::SIGN_UP_FAILED),
        }
    }
}

/// Sign-in submission failures
#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Sign-in form has invalid fields: {0}")]
    Invalid(FieldErrors<SignInField>),

    #[error("Sign-in request failed: {0}")]
    Service(#[from] AuthError),
}

impl SignInError {
    /// Banner message for a failure not tied to a single field
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(_) => None,
            Self::Service(_) => Some(messages::SIGN_IN_FAILED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_failures_map_to_email_field() {
        for err in [
            VerificationError::EmailRequired,
            VerificationError::EmailInvalid,
            VerificationError::EmailTaken,
            VerificationError::Busy(VerificationStep::CheckEmail),
            VerificationError::service(
                VerificationStep::CheckEmail,
                AuthError::Unavailable("down".into()),
            ),
        ] {
            assert_eq!(err.field(), SignUpField::Email, "{err}");
        }
    }

    #[test]
    fn test_code_failures_map_to_code_field() {
        let err = VerificationError::CodeExpired;
        assert_eq!(err.field(), SignUpField::VerificationCode);
        assert_eq!(err.user_message(), messages::CODE_EXPIRED);
    }

    #[test]
    fn test_send_rejected_prefers_server_reason() {
        let err = VerificationError::SendRejected(Some("일일 발송 한도 초과".into()));
        assert_eq!(err.user_message(), "일일 발송 한도 초과");
        assert!(err.is_remote());

        let err = VerificationError::SendRejected(None);
        assert_eq!(err.user_message(), messages::SEND_CODE_FAILED);
    }

    #[test]
    fn test_submit_banner_only_for_service_failures() {
        let err = SubmitError::Invalid(FieldErrors::new());
        assert_eq!(err.user_message(), None);
        let err = SignInError::from(AuthError::Unavailable("down".into()));
        assert_eq!(err.user_message(), Some(messages::SIGN_IN_FAILED));
    }

    #[test]
    fn test_service_message_depends_on_step() {
        let err = VerificationError::service(
            VerificationStep::VerifyCode,
            AuthError::Status {
                status: 500,
                message: "boom".into(),
            },
        );
        assert_eq!(err.user_message(), messages::CODE_VERIFY_FAILED);
        assert!(err.to_string().contains("verify-code failed"));
    }
}
