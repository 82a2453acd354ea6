//! Catalog content and home page logic for PromptHub
//!
//! Static fixtures for the home page sections, the filter chips and search
//! over prompt cards, and the explicit theme context the header reads.

pub mod filter;
pub mod fixtures;
pub mod theme;
pub mod types;

pub use filter::{search, SortFilter};
pub use fixtures::{
    category_cards, hero_cards, hero_models, hero_tags, platform_prompts, prompts_for_platform,
    trending_prompts,
};
pub use theme::{Theme, ThemeContext, ThemePreference};
pub use types::{
    CatalogError, CategoryCard, HeroModel, HeroTag, Level, PlatformPrompts, PriceLabel, PromptCard,
};
