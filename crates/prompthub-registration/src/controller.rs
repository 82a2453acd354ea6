//! Registration wizard controller
//!
//! The form starts with no prompt type; choosing one reveals the rest of
//! the form with type-specific option lists. Editing a field clears that
//! field's inline error.

use std::sync::Arc;

use prompthub_forms::FieldErrors;

use crate::constants::messages;
use crate::error::RegistrationError;
use crate::form::validate_registration;
use crate::options::{subjects_for, tools_for};
use crate::submit::{PromptSubmission, PromptSubmitter, SubmissionReceipt};
use crate::types::{
    MediaFile, MediaSlot, PricingType, PromptType, RegistrationField, RegistrationForm,
};

pub struct RegistrationController {
    form: RegistrationForm,
    errors: FieldErrors<RegistrationField>,
    submitter: Arc<dyn PromptSubmitter>,
}

impl RegistrationController {
    pub fn new(submitter: Arc<dyn PromptSubmitter>) -> Self {
        Self {
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            submitter,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors<RegistrationField> {
        &self.errors
    }

    pub fn error(&self, field: RegistrationField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether the full form is shown
    pub fn is_type_chosen(&self) -> bool {
        self.form.prompt_type.is_some()
    }

    pub fn ai_tools(&self) -> &'static [&'static str] {
        tools_for(self.form.prompt_type)
    }

    pub fn subject_options(&self) -> &'static [&'static str] {
        subjects_for(self.form.prompt_type)
    }

    // ─── FIELD EDITS ────────────────────────────────────────────────

    /// Choose the prompt type. Clears the tool, the subjects and all
    /// type-specific media, even when the same type is chosen again.
    pub fn set_prompt_type(&mut self, prompt_type: PromptType) {
        self.form.prompt_type = Some(prompt_type);
        self.form.ai_tool.clear();
        self.form.subjects.clear();
        self.form.video_url.clear();
        self.form.video_file = None;
        self.form.image_url.clear();
        self.form.image_file = None;
        self.errors.clear(RegistrationField::PromptType);
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.form.title = value.into();
        self.errors.clear(RegistrationField::Title);
    }

    pub fn set_pricing_type(&mut self, pricing_type: PricingType) {
        self.form.pricing_type = pricing_type;
        self.errors.clear(RegistrationField::PricingType);
        if pricing_type == PricingType::Free {
            self.errors.clear(RegistrationField::Price);
        }
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.form.price = value.into();
        self.errors.clear(RegistrationField::Price);
    }

    pub fn set_ai_tool(&mut self, value: impl Into<String>) {
        self.form.ai_tool = value.into();
        self.errors.clear(RegistrationField::AiTool);
    }

    /// Add `subject` if absent, remove it if present
    pub fn toggle_subject(&mut self, subject: &str) {
        match self.form.subjects.iter().position(|s| s == subject) {
            Some(index) => {
                self.form.subjects.remove(index);
            }
            None => self.form.subjects.push(subject.to_string()),
        }
        self.errors.clear(RegistrationField::Subjects);
    }

    pub fn set_prompt(&mut self, value: impl Into<String>) {
        self.form.prompt = value.into();
        self.errors.clear(RegistrationField::Prompt);
    }

    pub fn set_negative_prompt(&mut self, value: impl Into<String>) {
        self.form.negative_prompt = value.into();
        self.errors.clear(RegistrationField::NegativePrompt);
    }

    pub fn set_video_url(&mut self, value: impl Into<String>) {
        self.form.video_url = value.into();
        self.errors.clear(RegistrationField::VideoUrl);
    }

    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.form.image_url = value.into();
        self.errors.clear(RegistrationField::ImageUrl);
    }

    /// Attach or detach a file. A file the slot does not accept is left
    /// out and reported on the slot's field.
    pub fn set_file(&mut self, slot: MediaSlot, file: Option<MediaFile>) {
        let field = slot.field();
        match file {
            Some(file) if !slot.accepts(&file) => {
                log::debug!("Rejected {} ({}) for {:?}", file.name, file.mime_type, slot);
                self.errors.set(field, messages::FILE_UNSUPPORTED);
            }
            file => {
                *self.form.file_mut(slot) = file;
                self.errors.clear(field);
            }
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.form.description = value.into();
        self.errors.clear(RegistrationField::Description);
    }

    pub fn set_advanced_settings(&mut self, value: impl Into<String>) {
        self.form.advanced_settings = value.into();
        self.errors.clear(RegistrationField::AdvancedSettings);
    }

    pub fn set_aspect_ratio(&mut self, value: impl Into<String>) {
        self.form.aspect_ratio = value.into();
        self.errors.clear(RegistrationField::AspectRatio);
    }

    // ─── SUBMISSION ─────────────────────────────────────────────────

    pub fn validate(&mut self) -> bool {
        self.errors = validate_registration(&self.form);
        self.errors.is_empty()
    }

    /// Validate and hand the form to the submitter. Values are kept after
    /// either outcome.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, RegistrationError> {
        if !self.validate() {
            log::debug!("Registration blocked by {} field error(s)", self.errors.len());
            return Err(RegistrationError::Invalid(self.errors.clone()));
        }
        let Some(submission) = PromptSubmission::from_form(&self.form) else {
            return Err(RegistrationError::Invalid(self.errors.clone()));
        };

        match self.submitter.submit(&submission).await {
            Ok(receipt) => {
                log::info!("Registered prompt '{}' as {}", submission.title, receipt.id);
                Ok(receipt)
            }
            Err(e) => {
                log::warn!("Prompt submission failed: {}", e);
                Err(e)
            }
        }
    }
}
