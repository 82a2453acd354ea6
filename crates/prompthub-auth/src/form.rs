//! Sign-up and sign-in form data and their aggregate validation

use prompthub_forms::{FieldErrors, FormField};
use serde::{Deserialize, Serialize};

use crate::constants::messages;
use crate::validation::{is_valid_email, is_valid_password};

/// Fields of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignUpField {
    Email,
    VerificationCode,
    Nickname,
    Password,
    ConfirmPassword,
    TermsAgreed,
    PrivacyAgreed,
    MarketingAgreed,
}

impl FormField for SignUpField {
    fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::VerificationCode => "verificationCode",
            Self::Nickname => "nickname",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::TermsAgreed => "termsAgreed",
            Self::PrivacyAgreed => "privacyAgreed",
            Self::MarketingAgreed => "marketingAgreed",
        }
    }
}

/// Agreement checkboxes on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Agreement {
    Terms,
    Privacy,
    Marketing,
}

impl Agreement {
    pub fn field(self) -> SignUpField {
        match self {
            Self::Terms => SignUpField::TermsAgreed,
            Self::Privacy => SignUpField::PrivacyAgreed,
            Self::Marketing => SignUpField::MarketingAgreed,
        }
    }
}

/// Values of the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_agreed: bool,
    pub privacy_agreed: bool,
    pub marketing_agreed: bool,
    pub verification_code: String,
}

impl SignUpForm {
    pub fn agreement(&self, agreement: Agreement) -> bool {
        match agreement {
            Agreement::Terms => self.terms_agreed,
            Agreement::Privacy => self.privacy_agreed,
            Agreement::Marketing => self.marketing_agreed,
        }
    }

    pub fn set_agreement(&mut self, agreement: Agreement, value: bool) {
        match agreement {
            Agreement::Terms => self.terms_agreed = value,
            Agreement::Privacy => self.privacy_agreed = value,
            Agreement::Marketing => self.marketing_agreed = value,
        }
    }

    pub fn all_agreed(&self) -> bool {
        self.terms_agreed && self.privacy_agreed && self.marketing_agreed
    }
}

/// Message for the email field while typing, `None` when the field is fine.
///
/// Blank input is not flagged until submission.
pub fn live_email_error(email: &str) -> Option<&'static str> {
    if !email.trim().is_empty() && !is_valid_email(email) {
        Some(messages::EMAIL_INVALID)
    } else {
        None
    }
}

/// Re-evaluate the confirmation error after the password or its
/// confirmation changed.
pub fn refresh_confirm_error(form: &SignUpForm, errors: &mut FieldErrors<SignUpField>) {
    if form.confirm_password.is_empty() {
        return;
    }
    if !form.password.is_empty() && form.password != form.confirm_password {
        errors.set(SignUpField::ConfirmPassword, messages::PASSWORD_MISMATCH);
    } else {
        errors.clear(SignUpField::ConfirmPassword);
    }
}

/// Email shape error used by both live and submit validation
fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(messages::EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(messages::EMAIL_INVALID)
    } else {
        None
    }
}

/// Aggregate sign-up validation.
///
/// Returns every error found, not just the first. An empty map means the
/// form may be submitted.
pub fn validate_sign_up(form: &SignUpForm, email_verified: bool) -> FieldErrors<SignUpField> {
    let mut errors = FieldErrors::new();

    if let Some(message) = email_error(&form.email) {
        errors.set(SignUpField::Email, message);
    }

    if form.nickname.trim().is_empty() {
        errors.set(SignUpField::Nickname, messages::NICKNAME_REQUIRED);
    }

    if form.password.is_empty() {
        errors.set(SignUpField::Password, messages::PASSWORD_REQUIRED);
    } else if !is_valid_password(&form.password) {
        errors.set(SignUpField::Password, messages::PASSWORD_SHAPE);
    }

    if form.confirm_password.is_empty() {
        errors.set(SignUpField::ConfirmPassword, messages::CONFIRM_REQUIRED);
    } else if form.password != form.confirm_password {
        errors.set(SignUpField::ConfirmPassword, messages::PASSWORD_MISMATCH);
    }

    if !form.terms_agreed {
        errors.set(SignUpField::TermsAgreed, messages::TERMS_REQUIRED);
    }
    if !form.privacy_agreed {
        errors.set(SignUpField::PrivacyAgreed, messages::PRIVACY_REQUIRED);
    }

    if !email_verified {
        errors.set(SignUpField::VerificationCode, messages::VERIFICATION_REQUIRED);
    }

    errors
}

// ─── SIGN-IN ────────────────────────────────────────────────────────

/// Fields of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignInField {
    Email,
    Password,
}

impl FormField for SignInField {
    fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Values of the sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

pub fn validate_sign_in(form: &SignInForm) -> FieldErrors<SignInField> {
    let mut errors = FieldErrors::new();
    if let Some(message) = email_error(&form.email) {
        errors.set(SignInField::Email, message);
    }
    if form.password.is_empty() {
        errors.set(SignInField::Password, messages::PASSWORD_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SignUpForm {
        SignUpForm {
            email: "a@b.com".to_string(),
            nickname: "neo".to_string(),
            password: "abcd1234".to_string(),
            confirm_password: "abcd1234".to_string(),
            terms_agreed: true,
            privacy_agreed: true,
            marketing_agreed: false,
            verification_code: "123456".to_string(),
        }
    }

    #[test]
    fn test_complete_verified_form_has_no_errors() {
        let errors = validate_sign_up(&complete_form(), true);
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn test_unverified_form_is_blocked() {
        let errors = validate_sign_up(&complete_form(), false);
        assert_eq!(errors.fields(), vec![SignUpField::VerificationCode]);
        assert_eq!(
            errors.get(SignUpField::VerificationCode),
            Some(messages::VERIFICATION_REQUIRED)
        );
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = validate_sign_up(&SignUpForm::default(), false);
        assert_eq!(
            errors.fields(),
            vec![
                SignUpField::Email,
                SignUpField::VerificationCode,
                SignUpField::Nickname,
                SignUpField::Password,
                SignUpField::ConfirmPassword,
                SignUpField::TermsAgreed,
                SignUpField::PrivacyAgreed,
            ]
        );
        assert_eq!(errors.get(SignUpField::Email), Some(messages::EMAIL_REQUIRED));
    }

    #[test]
    fn test_marketing_agreement_is_optional() {
        let mut form = complete_form();
        form.marketing_agreed = false;
        assert!(validate_sign_up(&form, true).is_empty());
    }

    #[test]
    fn test_password_shape_and_mismatch() {
        let mut form = complete_form();
        form.password = "short1".to_string();
        form.confirm_password = "different1".to_string();
        let errors = validate_sign_up(&form, true);
        assert_eq!(errors.get(SignUpField::Password), Some(messages::PASSWORD_SHAPE));
        assert_eq!(
            errors.get(SignUpField::ConfirmPassword),
            Some(messages::PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn test_blank_nickname_rejected() {
        let mut form = complete_form();
        form.nickname = "   ".to_string();
        let errors = validate_sign_up(&form, true);
        assert!(errors.contains(SignUpField::Nickname));
    }

    #[test]
    fn test_live_email_error_ignores_blank() {
        assert_eq!(live_email_error(""), None);
        assert_eq!(live_email_error("a@b.com"), None);
        assert_eq!(live_email_error("a@b"), Some(messages::EMAIL_INVALID));
    }

    #[test]
    fn test_refresh_confirm_error() {
        let mut errors = FieldErrors::new();
        let mut form = SignUpForm {
            password: "abcd1234".to_string(),
            confirm_password: "abcd".to_string(),
            ..Default::default()
        };
        refresh_confirm_error(&form, &mut errors);
        assert!(errors.contains(SignUpField::ConfirmPassword));

        form.confirm_password = "abcd1234".to_string();
        refresh_confirm_error(&form, &mut errors);
        assert!(!errors.contains(SignUpField::ConfirmPassword));

        // Clearing the password drops a pending mismatch
        form.confirm_password = "zzz".to_string();
        refresh_confirm_error(&SignUpForm { password: "x".into(), ..form.clone() }, &mut errors);
        assert!(errors.contains(SignUpField::ConfirmPassword));
        form.password.clear();
        refresh_confirm_error(&form, &mut errors);
        assert!(!errors.contains(SignUpField::ConfirmPassword));
    }

    #[test]
    fn test_sign_in_validation() {
        let errors = validate_sign_in(&SignInForm::default());
        assert_eq!(errors.fields(), vec![SignInField::Email, SignInField::Password]);

        let form = SignInForm {
            email: "a@b.com".to_string(),
            password: "anything".to_string(),
        };
        assert!(validate_sign_in(&form).is_empty());
    }
}
