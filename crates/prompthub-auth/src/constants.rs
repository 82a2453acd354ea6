//! Auth-wide constants
//!
//! Single source of truth for verification timings, validation limits,
//! collaborator endpoints and the inline messages shown next to fields.

/// Verification timing defaults
pub mod timing {
    /// Lifetime of a dispatched verification code (3 minutes)
    pub const CODE_TTL_SECS: u32 = 180;
    /// Countdown tick period
    pub const TICK_INTERVAL_MS: u64 = 1000;
    /// Delay the simulated collaborator waits per call
    pub const SIMULATED_LATENCY_MS: u64 = 1000;
    /// HTTP collaborator request timeout
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
}

/// Field validation limits
pub mod limits {
    /// Minimum password length in characters
    pub const MIN_PASSWORD_LEN: usize = 8;
}

/// Endpoint paths used by the HTTP collaborator
pub mod endpoints {
    pub const CHECK_EMAIL: &str = "/api/auth/check-email";
    pub const SEND_VERIFICATION_CODE: &str = "/api/auth/send-verification-code";
    pub const VERIFY_CODE: &str = "/api/auth/verify-code";
    pub const SIGN_IN: &str = "/api/auth/login";
    pub const SIGN_UP: &str = "/api/auth/signup";
}

/// Inline field messages
pub mod messages {
    pub const EMAIL_REQUIRED: &str = "이메일을 입력해주세요.";
    pub const EMAIL_INVALID: &str = "올바른 이메일 형식이 아닙니다.";
    pub const EMAIL_TAKEN: &str = "이미 사용 중인 이메일입니다.";
    pub const EMAIL_CHECK_FAILED: &str = "이메일 중복 체크 중 오류가 발생했습니다.";
    pub const EMAIL_NOT_CHECKED: &str = "이메일 중복 확인을 먼저 진행해주세요.";

    pub const NICKNAME_REQUIRED: &str = "닉네임을 입력해주세요.";

    pub const PASSWORD_REQUIRED: &str = "비밀번호를 입력해주세요.";
    pub const PASSWORD_SHAPE: &str = "비밀번호는 최소 8자 이상, 숫자와 영문자를 포함해야 합니다.";
    pub const CONFIRM_REQUIRED: &str = "비밀번호 확인을 입력해주세요.";
    pub const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";

    pub const TERMS_REQUIRED: &str = "이용약관에 동의해주세요.";
    pub const PRIVACY_REQUIRED: &str = "개인정보 처리방침에 동의해주세요.";

    pub const SEND_CODE_FAILED: &str = "인증 코드 발송에 실패했습니다. 이메일 주소를 확인하고 다시 시도해주세요.";
    pub const CODE_REQUIRED: &str = "인증 코드를 입력해주세요.";
    pub const CODE_NOT_SENT: &str = "인증 코드를 먼저 발송해주세요.";
    pub const CODE_EXPIRED: &str = "인증 시간이 만료되었습니다. 다시 발송해주세요.";
    pub const CODE_MISMATCH: &str = "인증 코드가 일치하지 않습니다.";
    pub const CODE_VERIFY_FAILED: &str = "인증 코드 검증 중 오류가 발생했습니다.";
    pub const ALREADY_VERIFIED: &str = "이미 인증이 완료되었습니다.";
    pub const VERIFICATION_REQUIRED: &str = "이메일 인증을 완료해주세요.";
    pub const STEP_PENDING: &str = "요청을 처리하는 중입니다. 잠시만 기다려주세요.";

    pub const SIGN_IN_FAILED: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";
    pub const SIGN_UP_FAILED: &str = "회원가입 처리 중 오류가 발생했습니다.";
}
