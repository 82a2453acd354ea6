//! Option lists offered by the registration form

use serde::Serialize;

use crate::types::PromptType;

pub const AI_VIDEO_TOOLS: &[&str] = &[
    "Runway Gen-3",
    "Adobe Firefly",
    "Pika",
    "Stable Video Diffusion",
    "Kling AI",
    "Luma AI",
    "기타",
];

pub const AI_IMAGE_TOOLS: &[&str] = &[
    "Midjourney",
    "DALL-E",
    "Stable Diffusion",
    "Adobe Firefly",
    "Leonardo AI",
    "Ideogram",
    "기타",
];

pub const VIDEO_SUBJECTS: &[&str] = &[
    "풍경",
    "인물",
    "판타지",
    "제품",
    "애니메이션",
    "도시",
    "자연",
    "추상",
    "기타",
];

pub const IMAGE_SUBJECTS: &[&str] = &[
    "풍경",
    "인물",
    "판타지",
    "제품",
    "일러스트",
    "사진",
    "아트",
    "로고",
    "기타",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatioOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ASPECT_RATIOS: &[AspectRatioOption] = &[
    AspectRatioOption {
        label: "16:9 (가로)",
        value: "16:9",
    },
    AspectRatioOption {
        label: "9:16 (세로)",
        value: "9:16",
    },
    AspectRatioOption {
        label: "1:1 (정사각형)",
        value: "1:1",
    },
    AspectRatioOption {
        label: "4:3",
        value: "4:3",
    },
    AspectRatioOption {
        label: "21:9 (울트라와이드)",
        value: "21:9",
    },
];

/// AI tools offered for `prompt_type`. The video list is shown until a
/// type is chosen.
pub fn tools_for(prompt_type: Option<PromptType>) -> &'static [&'static str] {
    match prompt_type {
        Some(PromptType::Image) => AI_IMAGE_TOOLS,
        Some(PromptType::Video) | None => AI_VIDEO_TOOLS,
    }
}

pub fn subjects_for(prompt_type: Option<PromptType>) -> &'static [&'static str] {
    match prompt_type {
        Some(PromptType::Image) => IMAGE_SUBJECTS,
        Some(PromptType::Video) | None => VIDEO_SUBJECTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_follow_prompt_type() {
        assert_eq!(tools_for(Some(PromptType::Image))[0], "Midjourney");
        assert_eq!(tools_for(Some(PromptType::Video))[0], "Runway Gen-3");
        assert_eq!(tools_for(None), AI_VIDEO_TOOLS);
        assert!(subjects_for(Some(PromptType::Image)).contains(&"로고"));
        assert!(!subjects_for(Some(PromptType::Video)).contains(&"로고"));
    }

    #[test]
    fn test_every_list_ends_with_other() {
        for list in [AI_VIDEO_TOOLS, AI_IMAGE_TOOLS, VIDEO_SUBJECTS, IMAGE_SUBJECTS] {
            assert_eq!(list.last(), Some(&"기타"));
        }
    }

    #[test]
    fn test_aspect_ratio_values_are_unique() {
        let mut values: Vec<_> = ASPECT_RATIOS.iter().map(|r| r.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), ASPECT_RATIOS.len());
    }
}
