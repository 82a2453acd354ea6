//! Prompt submission collaborator
//!
//! The registration controller hands a validated [`PromptSubmission`] to a
//! `PromptSubmitter`. Files travel as metadata only.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{messages, SIMULATED_LATENCY_MS};
use crate::error::RegistrationError;
use crate::form::parse_price;
use crate::types::{MediaFile, PricingType, PromptType, RegistrationForm};

/// A validated registration, ready to hand to a submitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSubmission {
    pub prompt_type: PromptType,
    pub title: String,
    pub pricing_type: PricingType,
    /// Whole won; `None` for free prompts
    pub price: Option<u64>,
    pub ai_tool: String,
    pub subjects: Vec<String>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file: Option<MediaFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<MediaFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl PromptSubmission {
    /// Build a submission from form values. Returns `None` until a prompt
    /// type is chosen; call after validation so every other field is sound.
    pub fn from_form(form: &RegistrationForm) -> Option<Self> {
        let prompt_type = form.prompt_type?;
        let (media_url, media_file) = match prompt_type {
            PromptType::Video => (non_blank(&form.video_url), form.video_file.clone()),
            PromptType::Image => (non_blank(&form.image_url), form.image_file.clone()),
        };
        let price = match form.pricing_type {
            PricingType::Free => None,
            PricingType::Paid => parse_price(&form.price),
        };

        Some(Self {
            prompt_type,
            title: form.title.trim().to_string(),
            pricing_type: form.pricing_type,
            price,
            ai_tool: form.ai_tool.clone(),
            subjects: form.subjects.clone(),
            prompt: form.prompt.trim().to_string(),
            negative_prompt: non_blank(&form.negative_prompt),
            media_url,
            media_file,
            preview_image: form.preview_image.clone(),
            description: non_blank(&form.description),
            advanced_settings: non_blank(&form.advanced_settings),
            aspect_ratio: non_blank(&form.aspect_ratio),
        })
    }
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

#[async_trait]
pub trait PromptSubmitter: Send + Sync {
    async fn submit(&self, submission: &PromptSubmission)
        -> Result<SubmissionReceipt, RegistrationError>;
}

/// Accepts every submission after a fixed delay
pub struct SimulatedPromptSubmitter {
    latency: Duration,
}

impl SimulatedPromptSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedPromptSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_LATENCY_MS))
    }
}

#[async_trait]
impl PromptSubmitter for SimulatedPromptSubmitter {
    async fn submit(
        &self,
        submission: &PromptSubmission,
    ) -> Result<SubmissionReceipt, RegistrationError> {
        log::debug!("Simulated prompt submission: {}", submission.title);
        tokio::time::sleep(self.latency).await;
        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            message: messages::SUBMITTED.to_string(),
        })
    }
}
