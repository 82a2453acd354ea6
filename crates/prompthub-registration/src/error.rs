//! Error types for prompt registration

use prompthub_forms::FieldErrors;
use thiserror::Error;

use crate::types::RegistrationField;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration form has invalid fields: {0}")]
    Invalid(FieldErrors<RegistrationField>),

    #[error("Submission failed: {0}")]
    Submission(String),
}
