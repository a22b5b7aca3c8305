//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
///
/// 리프레시 토큰은 우선 쿠키에서 읽으며, 쿠키가 없는 클라이언트를
/// 위해 본문으로도 받을 수 있습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 Google은 `code` 없이 `error`만 붙여
/// 리다이렉트하므로, `code`는 쿼리 추출 단계에서 필수가 아닙니다.
/// 에러 검사 후 핸들러에서 필수 여부를 확인합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 비밀번호 재설정 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 확정 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "재설정 토큰이 필요합니다"))]
    pub token: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}
