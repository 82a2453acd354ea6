//! Sign-up form controller
//!
//! Owns the form values and their inline errors, and drives the
//! verification sequencer from the values the user entered. Every
//! sequencer failure lands on the field it belongs to; nothing here is
//! fatal and every action may be retried.

use std::sync::Arc;

use prompthub_forms::FieldErrors;

use crate::config::VerificationConfig;
use crate::error::{SubmitError, VerificationError};
use crate::events::{EventSink, NullEventSink};
use crate::form::{
    live_email_error, refresh_confirm_error, validate_sign_up, Agreement, SignUpField, SignUpForm,
};
use crate::sequencer::{VerificationSequencer, VerificationStage};
use crate::service::{SharedAuthService, SignUpRequest, SignUpResponse};

pub struct SignUpController {
    form: SignUpForm,
    errors: FieldErrors<SignUpField>,
    sequencer: Arc<VerificationSequencer>,
    service: SharedAuthService,
}

impl SignUpController {
    pub fn new(service: SharedAuthService, config: VerificationConfig) -> Self {
        Self::with_sink(service, config, Arc::new(NullEventSink))
    }

    pub fn with_sink(
        service: SharedAuthService,
        config: VerificationConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let sequencer = VerificationSequencer::with_sink(Arc::clone(&service), config, sink);
        Self {
            form: SignUpForm::default(),
            errors: FieldErrors::new(),
            sequencer: Arc::new(sequencer),
            service,
        }
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors<SignUpField> {
        &self.errors
    }

    pub fn error(&self, field: SignUpField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Shared handle to the sequencer, e.g. for watching the countdown
    pub fn sequencer(&self) -> &Arc<VerificationSequencer> {
        &self.sequencer
    }

    pub fn stage(&self) -> VerificationStage {
        self.sequencer.stage()
    }

    pub fn is_verified(&self) -> bool {
        self.sequencer.is_verified()
    }

    // ─── FIELD EDITS ────────────────────────────────────────────────

    /// Update the email. A changed value resets verification and clears the
    /// entered code.
    pub fn set_email(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.form.email {
            return;
        }
        self.form.email = value;

        match live_email_error(&self.form.email) {
            Some(message) => self.errors.set(SignUpField::Email, message),
            None => {
                self.errors.clear(SignUpField::Email);
            }
        }

        if self.sequencer.stage() != VerificationStage::Unchecked {
            log::debug!("Email changed, verification reset");
        }
        self.sequencer.reset();
        self.form.verification_code.clear();
        self.errors.clear(SignUpField::VerificationCode);
    }

    pub fn set_nickname(&mut self, value: impl Into<String>) {
        self.form.nickname = value.into();
        self.errors.clear(SignUpField::Nickname);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
        self.errors.clear(SignUpField::Password);
        refresh_confirm_error(&self.form, &mut self.errors);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = value.into();
        if self.form.confirm_password.is_empty() {
            self.errors.clear(SignUpField::ConfirmPassword);
        }
        refresh_confirm_error(&self.form, &mut self.errors);
    }

    pub fn set_verification_code(&mut self, value: impl Into<String>) {
        self.form.verification_code = value.into();
        self.errors.clear(SignUpField::VerificationCode);
    }

    pub fn set_agreement(&mut self, agreement: Agreement, value: bool) {
        self.form.set_agreement(agreement, value);
        self.errors.clear(agreement.field());
    }

    /// "Agree to all": clears every agreement when all are set, otherwise
    /// sets every agreement.
    pub fn toggle_agree_all(&mut self) {
        let value = !self.form.all_agreed();
        for agreement in [Agreement::Terms, Agreement::Privacy, Agreement::Marketing] {
            self.set_agreement(agreement, value);
        }
    }

    // ─── VERIFICATION ───────────────────────────────────────────────

    /// Check availability of the entered email
    pub async fn check_email(&mut self) -> Result<(), VerificationError> {
        let email = self.form.email.clone();
        let result = self.sequencer.check_email(&email).await;
        self.record(SignUpField::Email, result)
    }

    /// Send (or resend) a verification code to the checked email
    pub async fn send_code(&mut self) -> Result<(), VerificationError> {
        let result = self.sequencer.send_code().await;
        if result.is_ok() {
            self.form.verification_code.clear();
        }
        self.record(SignUpField::VerificationCode, result)
    }

    /// Verify the entered code
    pub async fn verify_code(&mut self) -> Result<(), VerificationError> {
        let code = self.form.verification_code.clone();
        let result = self.sequencer.verify_code(&code).await;
        self.record(SignUpField::VerificationCode, result)
    }

    /// Reset verification without touching the entered values
    pub fn reset_verification(&mut self) {
        self.sequencer.reset();
        self.errors.clear(SignUpField::VerificationCode);
    }

    /// Apply a step outcome to the inline errors.
    ///
    /// Success clears `cleared`. A stale response leaves the errors alone.
    fn record(
        &mut self,
        cleared: SignUpField,
        result: Result<(), VerificationError>,
    ) -> Result<(), VerificationError> {
        match &result {
            Ok(()) => {
                self.errors.clear(cleared);
            }
            Err(VerificationError::Stale { .. }) => {}
            Err(err) => self.errors.set(err.field(), err.user_message()),
        }
        result
    }

    // ─── SUBMISSION ─────────────────────────────────────────────────

    /// Run aggregate validation, replacing the inline errors. Returns
    /// whether the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_sign_up(&self.form, self.sequencer.is_verified());
        self.errors.is_empty()
    }

    /// Whether submission would pass validation, without touching errors
    pub fn can_submit(&self) -> bool {
        validate_sign_up(&self.form, self.sequencer.is_verified()).is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear_all();
    }

    /// Validate and submit. On success the form is discarded and the
    /// sequencer reset; on failure the values are kept for a retry.
    pub async fn submit(&mut self) -> Result<SignUpResponse, SubmitError> {
        if !self.validate() {
            log::debug!("Sign-up blocked by {} field error(s)", self.errors.len());
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let request = SignUpRequest {
            email: self.form.email.trim().to_string(),
            nickname: self.form.nickname.trim().to_string(),
            password: self.form.password.clone(),
            marketing_agreed: self.form.marketing_agreed,
        };

        match self.service.sign_up(&request).await {
            Ok(response) => {
                log::info!("Signed up {} as {}", request.email, response.user_id);
                self.form = SignUpForm::default();
                self.errors.clear_all();
                self.sequencer.reset();
                Ok(response)
            }
            Err(e) => {
                log::warn!("Sign-up request failed: {}", e);
                Err(SubmitError::Service(e))
            }
        }
    }
}
