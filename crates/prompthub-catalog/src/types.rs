//! Catalog types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unrecognised price label: {0}")]
    InvalidPrice(String),
}

/// Difficulty level shown on a prompt card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "입문")]
    Beginner,
    #[serde(rename = "중급")]
    Intermediate,
    #[serde(rename = "고급")]
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "입문",
            Self::Intermediate => "중급",
            Self::Advanced => "고급",
        }
    }
}

/// Price as shown on a card: `무료` or a won amount like `₩4,900`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceLabel {
    Free,
    Won(u64),
}

impl PriceLabel {
    pub fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn won(self) -> u64 {
        match self {
            Self::Free => 0,
            Self::Won(amount) => amount,
        }
    }
}

impl FromStr for PriceLabel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "무료" {
            return Ok(Self::Free);
        }
        let digits: String = trimmed
            .strip_prefix('₩')
            .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CatalogError::InvalidPrice(s.to_string()));
        }
        digits
            .parse()
            .map(Self::Won)
            .map_err(|_| CatalogError::InvalidPrice(s.to_string()))
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("무료"),
            Self::Won(amount) => {
                let digits = amount.to_string();
                let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
                for (i, c) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        grouped.push(',');
                    }
                    grouped.push(c);
                }
                write!(f, "₩{grouped}")
            }
        }
    }
}

impl TryFrom<String> for PriceLabel {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceLabel> for String {
    fn from(value: PriceLabel) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCard {
    pub title: String,
    pub thumbnail: String,
    pub price_label: PriceLabel,
    pub likes: u32,
    pub downloads: u32,
    pub rating: f32,
    pub summary: String,
    pub keywords: Vec<String>,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub key: String,
    pub icon: String,
    pub title: String,
    pub items: Vec<String>,
    pub total: u32,
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroTag {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroModel {
    pub name: &'static str,
    pub badge: &'static str,
}

/// Prompts recommended for one AI platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformPrompts {
    pub platform: &'static str,
    pub prompts: Vec<PromptCard>,
}
