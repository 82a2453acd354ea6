//! Static catalog content for the home page
//!
//! Built once on first access.

use once_cell::sync::Lazy;

use crate::types::{
    CategoryCard, HeroModel, HeroTag, Level, PlatformPrompts, PriceLabel, PromptCard,
};

/// Number of trending prompts featured in the hero section
pub const HERO_CARD_COUNT: usize = 3;

fn card(
    title: &str,
    thumbnail: &str,
    price_label: PriceLabel,
    (likes, downloads, rating): (u32, u32, f32),
    summary: &str,
    keywords: &[&str],
    level: Level,
) -> PromptCard {
    PromptCard {
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        price_label,
        likes,
        downloads,
        rating,
        summary: summary.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        level,
    }
}

static TRENDING_PROMPTS: Lazy<Vec<PromptCard>> = Lazy::new(|| {
    vec![
        card(
            "ChatGPT 블로그 초안 생성 프롬프트",
            "/window.svg",
            PriceLabel::Free,
            (324, 1089, 4.7),
            "키워드만 입력하면 SEO 맞춤 블로그 초안을 5분 만에 생성합니다.",
            &["블로그", "SEO", "콘텐츠"],
            Level::Beginner,
        ),
        card(
            "Midjourney 8K 제품 렌더 템플릿",
            "/globe.svg",
            PriceLabel::Won(4900),
            (210, 742, 4.6),
            "프리미엄 전자제품 목업을 8K 해상도로 안정적으로 생성합니다.",
            &["이미지", "제품", "8K"],
            Level::Advanced,
        ),
        card(
            "Claude 회의록 요약/액션아이템 추출",
            "/file.svg",
            PriceLabel::Free,
            (189, 680, 4.5),
            "회의 대화를 요약하고 실행해야 할 항목을 자동으로 정리합니다.",
            &["업무", "요약", "액션아이템"],
            Level::Intermediate,
        ),
        card(
            "코드 리뷰 자동화 프롬프트 (TS/React)",
            "/vercel.svg",
            PriceLabel::Won(2900),
            (132, 401, 4.4),
            "PR 설명을 분석해 테스트 누락과 코드 스멜을 진단합니다.",
            &["개발", "리뷰", "테스트"],
            Level::Advanced,
        ),
    ]
});

fn category(
    key: &str,
    icon: &str,
    title: &str,
    items: &[&str],
    total: u32,
    is_new: bool,
) -> CategoryCard {
    CategoryCard {
        key: key.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
        total,
        is_new,
    }
}

static CATEGORY_CARDS: Lazy<Vec<CategoryCard>> = Lazy::new(|| {
    vec![
        category("image", "🎨", "이미지 생성", &["제품 목업", "브랜딩 일러스트", "콘셉트 아트"], 1240, false),
        category("writing", "✍️", "글쓰기 / 블로그", &["SEO 블로그", "소셜 캡션", "뉴스레터"], 980, false),
        category("dev", "👩‍💻", "개발 / 코드", &["코드 리뷰", "테스트 생성", "리팩터 가이드"], 860, true),
        category("marketing", "📈", "마케팅 / 광고", &["랜딩 카피", "키워드 리서치", "A/B 카피"], 1120, false),
        category("learn", "🧠", "학습 / 교육", &["요약/퀴즈", "튜터 프롬프트", "개념 확장"], 540, false),
    ]
});

static PLATFORM_PROMPTS: Lazy<Vec<PlatformPrompts>> = Lazy::new(|| {
    ["ChatGPT", "Midjourney", "Claude"]
        .into_iter()
        .map(|platform| PlatformPrompts {
            platform,
            prompts: TRENDING_PROMPTS.clone(),
        })
        .collect()
});

const HERO_TAGS: &[HeroTag] = &[
    HeroTag { label: "🔥 트렌드", value: "trend" },
    HeroTag { label: "무료 프롬프트", value: "free" },
    HeroTag { label: "노코드 자동화", value: "nocode" },
    HeroTag { label: "이미지 생성", value: "image" },
    HeroTag { label: "마케팅 카피", value: "marketing" },
];

const HERO_MODELS: &[HeroModel] = &[
    HeroModel { name: "ChatGPT", badge: "GPT-4" },
    HeroModel { name: "Claude", badge: "3.5 Sonnet" },
    HeroModel { name: "Midjourney", badge: "V6" },
    HeroModel { name: "Stable Diffusion", badge: "XL" },
];

pub fn trending_prompts() -> &'static [PromptCard] {
    &TRENDING_PROMPTS
}

pub fn category_cards() -> &'static [CategoryCard] {
    &CATEGORY_CARDS
}

/// Recommendations per platform, in tab order
pub fn platform_prompts() -> &'static [PlatformPrompts] {
    &PLATFORM_PROMPTS
}

pub fn prompts_for_platform(platform: &str) -> Option<&'static [PromptCard]> {
    platform_prompts()
        .iter()
        .find(|p| p.platform.eq_ignore_ascii_case(platform))
        .map(|p| p.prompts.as_slice())
}

pub fn hero_tags() -> &'static [HeroTag] {
    HERO_TAGS
}

pub fn hero_models() -> &'static [HeroModel] {
    HERO_MODELS
}

/// The first trending prompts, featured in the hero section
pub fn hero_cards() -> &'static [PromptCard] {
    let trending = trending_prompts();
    &trending[..HERO_CARD_COUNT.min(trending.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_cards_are_first_three_trending() {
        let hero = hero_cards();
        assert_eq!(hero.len(), 3);
        assert_eq!(hero, &trending_prompts()[..3]);
    }

    #[test]
    fn test_platform_tabs_in_order() {
        let names: Vec<_> = platform_prompts().iter().map(|p| p.platform).collect();
        assert_eq!(names, vec!["ChatGPT", "Midjourney", "Claude"]);
        assert_eq!(prompts_for_platform("claude").map(<[_]>::len), Some(4));
        assert!(prompts_for_platform("Gemini").is_none());
    }

    #[test]
    fn test_only_dev_category_is_new() {
        let new: Vec<_> = category_cards()
            .iter()
            .filter(|c| c.is_new)
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(new, vec!["dev"]);
    }

    #[test]
    fn test_fixture_prices() {
        let paid: Vec<_> = trending_prompts()
            .iter()
            .filter_map(|p| (!p.price_label.is_free()).then(|| p.price_label.won()))
            .collect();
        assert_eq!(paid, vec![4900, 2900]);
        assert_eq!(hero_tags()[0].value, "trend");
        assert_eq!(hero_models().len(), 4);
    }
}
