//! Registration data types

use prompthub_forms::FormField;
use serde::{Deserialize, Serialize};

/// Kind of media the prompt generates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    Image,
    Video,
}

impl PromptType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "이미지 프롬프트",
            Self::Video => "동영상 프롬프트",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Free,
    Paid,
}

/// Metadata of a file picked by the user. File contents never leave the
/// host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// File inputs on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaSlot {
    VideoFile,
    ImageFile,
    PreviewImage,
}

impl MediaSlot {
    /// MIME patterns accepted by the slot; `type/*` matches any subtype
    pub fn accepted_types(self) -> &'static [&'static str] {
        match self {
            Self::VideoFile => &["video/*", "image/gif"],
            Self::ImageFile => &["image/jpeg", "image/png", "image/webp"],
            Self::PreviewImage => &["image/jpeg", "image/png"],
        }
    }

    pub fn accepts(self, file: &MediaFile) -> bool {
        let mime = file.mime_type.to_ascii_lowercase();
        let by_mime = self.accepted_types().iter().any(|pattern| {
            match pattern.strip_suffix("/*") {
                Some(kind) => mime.split('/').next() == Some(kind),
                None => mime == *pattern,
            }
        });
        // GIFs are accepted as video by extension as well
        by_mime || (self == Self::VideoFile && file.extension().as_deref() == Some("gif"))
    }

    /// The field the slot's errors are shown under
    pub fn field(self) -> RegistrationField {
        match self {
            Self::VideoFile => RegistrationField::VideoUrl,
            Self::ImageFile => RegistrationField::ImageUrl,
            Self::PreviewImage => RegistrationField::PreviewImage,
        }
    }
}

/// Fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    PromptType,
    Title,
    PricingType,
    Price,
    AiTool,
    Subjects,
    Prompt,
    NegativePrompt,
    VideoUrl,
    ImageUrl,
    PreviewImage,
    Description,
    AdvancedSettings,
    AspectRatio,
}

impl FormField for RegistrationField {
    fn name(&self) -> &'static str {
        match self {
            Self::PromptType => "promptType",
            Self::Title => "title",
            Self::PricingType => "pricingType",
            Self::Price => "price",
            Self::AiTool => "aiTool",
            Self::Subjects => "subjects",
            Self::Prompt => "prompt",
            Self::NegativePrompt => "negativePrompt",
            Self::VideoUrl => "videoUrl",
            Self::ImageUrl => "imageUrl",
            Self::PreviewImage => "previewImage",
            Self::Description => "description",
            Self::AdvancedSettings => "advancedSettings",
            Self::AspectRatio => "aspectRatio",
        }
    }
}

/// Values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub prompt_type: Option<PromptType>,
    pub title: String,
    pub pricing_type: PricingType,
    pub price: String,
    pub ai_tool: String,
    pub subjects: Vec<String>,
    pub prompt: String,
    pub negative_prompt: String,
    pub video_url: String,
    pub video_file: Option<MediaFile>,
    pub image_url: String,
    pub image_file: Option<MediaFile>,
    pub preview_image: Option<MediaFile>,
    pub description: String,
    pub advanced_settings: String,
    pub aspect_ratio: String,
}

impl RegistrationForm {
    pub fn file(&self, slot: MediaSlot) -> Option<&MediaFile> {
        match slot {
            MediaSlot::VideoFile => self.video_file.as_ref(),
            MediaSlot::ImageFile => self.image_file.as_ref(),
            MediaSlot::PreviewImage => self.preview_image.as_ref(),
        }
    }

    pub(crate) fn file_mut(&mut self, slot: MediaSlot) -> &mut Option<MediaFile> {
        match slot {
            MediaSlot::VideoFile => &mut self.video_file,
            MediaSlot::ImageFile => &mut self.image_file,
            MediaSlot::PreviewImage => &mut self.preview_image,
        }
    }
}
