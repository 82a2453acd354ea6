//! Sign-in form controller

use prompthub_forms::FieldErrors;

use crate::error::SignInError;
use crate::form::{validate_sign_in, SignInField, SignInForm};
use crate::service::{SharedAuthService, SignInRequest, SignInResponse};

pub struct SignInController {
    form: SignInForm,
    errors: FieldErrors<SignInField>,
    service: SharedAuthService,
}

impl SignInController {
    pub fn new(service: SharedAuthService) -> Self {
        Self {
            form: SignInForm::default(),
            errors: FieldErrors::new(),
            service,
        }
    }

    pub fn form(&self) -> &SignInForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors<SignInField> {
        &self.errors
    }

    pub fn error(&self, field: SignInField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.errors.clear(SignInField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
        self.errors.clear(SignInField::Password);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear_all();
    }

    /// Replace the inline errors with a fresh validation pass
    pub fn validate(&mut self) -> bool {
        self.errors = validate_sign_in(&self.form);
        self.errors.is_empty()
    }

    /// Validate and sign in. The password is cleared on success.
    pub async fn submit(&mut self) -> Result<SignInResponse, SignInError> {
        if !self.validate() {
            return Err(SignInError::Invalid(self.errors.clone()));
        }

        let request = SignInRequest {
            email: self.form.email.trim().to_string(),
            password: self.form.password.clone(),
        };

        match self.service.sign_in(&request).await {
            Ok(response) => {
                log::info!("Signed in {}", request.email);
                self.form.password.clear();
                Ok(response)
            }
            Err(e) => {
                log::warn!("Sign-in request failed: {}", e);
                Err(SignInError::Service(e))
            }
        }
    }
}
