//! Browse filters and search over prompt cards

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::PromptCard;

/// Filter chips shown above the prompt list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortFilter {
    /// Catalog order, newest first
    #[default]
    Latest,
    BestSelling,
    TopRated,
    FreeOnly,
    PremiumOnly,
}

impl SortFilter {
    pub const ALL: [SortFilter; 5] = [
        Self::Latest,
        Self::BestSelling,
        Self::TopRated,
        Self::FreeOnly,
        Self::PremiumOnly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "최신 등록",
            Self::BestSelling => "판매량 높은 순",
            Self::TopRated => "평점 높은 순",
            Self::FreeOnly => "무료 프롬프트",
            Self::PremiumOnly => "프리미엄",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Filter and order `prompts`. Sorts are stable so ties keep catalog
    /// order.
    pub fn apply<'a>(self, prompts: &'a [PromptCard]) -> Vec<&'a PromptCard> {
        let mut result: Vec<&PromptCard> = prompts.iter().collect();
        match self {
            Self::Latest => {}
            Self::BestSelling => result.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
            Self::TopRated => result.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            Self::FreeOnly => result.retain(|p| p.price_label.is_free()),
            Self::PremiumOnly => result.retain(|p| !p.price_label.is_free()),
        }
        result
    }
}

/// Case-insensitive match of `query` against title, summary and keywords.
/// A blank query matches everything.
pub fn search<'a>(prompts: &'a [PromptCard], query: &str) -> Vec<&'a PromptCard> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return prompts.iter().collect();
    }
    prompts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.summary.to_lowercase().contains(&needle)
                || p.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
        })
        .collect()
}
