//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 이메일 중복 여부는 서비스 계층에서 별도로 검증됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "name": "John Doe",
///   "password": "SecurePass123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자 이름 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
