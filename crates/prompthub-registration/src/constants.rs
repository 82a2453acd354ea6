//! Registration constants

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 50;

/// Delay the simulated submitter waits per submission
pub const SIMULATED_LATENCY_MS: u64 = 1000;

/// Inline messages shown next to registration fields
pub mod messages {
    pub const TYPE_REQUIRED: &str = "프롬프트 타입을 선택해주세요.";
    pub const TITLE_REQUIRED: &str = "제목을 입력해주세요.";
    pub const TITLE_TOO_LONG: &str = "제목은 50자 이하로 입력해주세요.";
    pub const PRICE_REQUIRED: &str = "가격을 입력해주세요.";
    pub const PRICE_INVALID: &str = "가격은 숫자로 입력해주세요.";
    pub const AI_TOOL_REQUIRED: &str = "AI 도구를 선택해주세요.";
    pub const SUBJECTS_REQUIRED: &str = "최소 1개 이상의 주제를 선택해주세요.";
    pub const PROMPT_REQUIRED: &str = "원본 프롬프트를 입력해주세요.";
    pub const VIDEO_REQUIRED: &str = "영상 파일을 업로드하거나 링크를 입력해주세요.";
    pub const IMAGE_REQUIRED: &str = "이미지 파일을 업로드하거나 링크를 입력해주세요.";
    pub const FILE_UNSUPPORTED: &str = "지원하지 않는 파일 형식입니다.";
    pub const SUBMITTED: &str = "프롬프트가 성공적으로 등록되었습니다!";
}
