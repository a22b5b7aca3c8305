use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 액세스 토큰을 검증한 뒤 request extensions에
/// 삽입하며, 핸들러에서는 extractor로 꺼내 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex)
    pub user_id: String,

    /// 사용자 이메일
    pub email: String,

    /// 사용자 역할
    pub role: String,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(crate::errors::errors::AppError::Unauthenticated(
                "Not authenticated".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_checks() {
        let admin = AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        };
        assert!(admin.is_admin());
        assert!(admin.has_role("admin"));
        assert!(!admin.has_role("user"));

        let user = AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439012".to_string(),
            email: "user@example.com".to_string(),
            role: "user".to_string(),
        };
        assert!(!user.is_admin());
    }
}
