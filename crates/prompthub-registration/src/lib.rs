//! Prompt registration wizard for PromptHub
//!
//! A seller picks a prompt type (image or video), fills in the listing and
//! attaches example media. [`RegistrationController`] validates the form
//! and hands it to a [`PromptSubmitter`].

pub mod constants;
pub mod controller;
pub mod error;
pub mod form;
pub mod options;
pub mod submit;
pub mod types;

pub use controller::RegistrationController;
pub use error::RegistrationError;
pub use form::{parse_price, validate_registration};
pub use submit::{PromptSubmission, PromptSubmitter, SimulatedPromptSubmitter, SubmissionReceipt};
pub use types::{MediaFile, MediaSlot, PricingType, PromptType, RegistrationField, RegistrationForm};
