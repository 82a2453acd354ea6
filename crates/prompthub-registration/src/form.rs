//! Aggregate validation of the registration form

use prompthub_forms::FieldErrors;

use crate::constants::{messages, TITLE_MAX_CHARS};
use crate::types::{PricingType, PromptType, RegistrationField, RegistrationForm};

/// Parse a price entered as whole won. Grouping commas and surrounding
/// whitespace are tolerated.
pub fn parse_price(input: &str) -> Option<u64> {
    let digits: String = input.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Check every field, returning all errors found. An empty map means the
/// form may be submitted.
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors<RegistrationField> {
    let mut errors = FieldErrors::new();

    if form.prompt_type.is_none() {
        errors.set(RegistrationField::PromptType, messages::TYPE_REQUIRED);
    }

    if form.title.trim().is_empty() {
        errors.set(RegistrationField::Title, messages::TITLE_REQUIRED);
    } else if form.title.chars().count() > TITLE_MAX_CHARS {
        errors.set(RegistrationField::Title, messages::TITLE_TOO_LONG);
    }

    if form.pricing_type == PricingType::Paid {
        if form.price.trim().is_empty() {
            errors.set(RegistrationField::Price, messages::PRICE_REQUIRED);
        } else if parse_price(&form.price).is_none() {
            errors.set(RegistrationField::Price, messages::PRICE_INVALID);
        }
    }

    if form.ai_tool.is_empty() {
        errors.set(RegistrationField::AiTool, messages::AI_TOOL_REQUIRED);
    }

    if form.subjects.is_empty() {
        errors.set(RegistrationField::Subjects, messages::SUBJECTS_REQUIRED);
    }

    if form.prompt.trim().is_empty() {
        errors.set(RegistrationField::Prompt, messages::PROMPT_REQUIRED);
    }

    match form.prompt_type {
        Some(PromptType::Video) => {
            if form.video_url.trim().is_empty() && form.video_file.is_none() {
                errors.set(RegistrationField::VideoUrl, messages::VIDEO_REQUIRED);
            }
        }
        Some(PromptType::Image) => {
            if form.image_url.trim().is_empty() && form.image_file.is_none() {
                errors.set(RegistrationField::ImageUrl, messages::IMAGE_REQUIRED);
            }
        }
        None => {}
    }

    errors
}
