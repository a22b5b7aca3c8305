//! # Google OAuth 사용자 정보 모델
//!
//! Google OAuth 2.0 UserInfo 엔드포인트에서 반환되는 사용자 정보를
//! 역직렬화하기 위한 데이터 모델을 정의합니다.
//!
//! - **UserInfo API**: `https://www.googleapis.com/oauth2/v2/userinfo`
//! - 필요 스코프: `openid email profile`

use serde::Deserialize;

/// Google OAuth 2.0 사용자 정보 응답 구조체
///
/// `id`는 Google 계정의 영구 식별자(sub)로 계정 조회 키로 사용됩니다.
/// `email`과 `name`은 스코프 동의 여부에 따라 누락될 수 있으므로
/// Option으로 두고, 서비스 계층에서 필수 여부를 검증합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 영구 식별자
    pub id: String,
    /// 사용자 이메일 (email 스코프 필요)
    pub email: Option<String>,
    /// 이메일 검증 여부
    pub verified_email: Option<bool>,
    /// 사용자 전체 이름 (profile 스코프 필요)
    pub name: Option<String>,
    /// 프로필 이미지 URL
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{
            "id": "108204268033311374519",
            "email": "user@gmail.com",
            "verified_email": true,
            "name": "Test User",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "108204268033311374519");
        assert_eq!(info.email.as_deref(), Some("user@gmail.com"));
        assert_eq!(info.name.as_deref(), Some("Test User"));
    }

    #[test]
    fn test_deserialize_minimal_profile() {
        // 스코프 미동의 시 이메일/이름이 빠진 채 내려올 수 있습니다.
        let json = r#"{ "id": "108204268033311374519" }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert!(info.email.is_none());
        assert!(info.name.is_none());
    }
}
