//! 사용자 응답 DTO 모듈
//!
//! 사용자 엔티티를 클라이언트에 노출 가능한 형태로 변환하는 DTO를 정의합니다.
//! 민감한 필드는 변환 과정에서 제외됩니다.
use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::{User, UserRole};

/// 사용자 응답 DTO
///
/// 엔티티에서 노출 가능한 필드만 명시적으로 매핑합니다.
/// 비밀번호 해시, 리프레시 토큰, 재설정 토큰은 절대 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,

    /// 인증 프로바이더 (local, google)
    pub provider: AuthProvider,

    pub role: UserRole,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            name: user.name,
            provider: user.provider,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
