//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 Google OAuth 인증을 모두 지원하는 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 역할
///
/// BSON/JSON에서는 소문자 문자열("user", "admin")로 표현됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 로컬 인증(이메일/패스워드)과 Google OAuth 인증을 모두 지원하며,
/// 현재 세션의 리프레시 토큰과 비밀번호 재설정 토큰을 함께 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 소문자 정규화)
    pub email: String,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 사용자 이름
    pub name: String,
    /// 인증 프로바이더
    pub provider: AuthProvider,
    /// Google 계정 식별자 (Google 사용자만 보유)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// 현재 세션의 리프레시 토큰 (로그아웃 시 제거, 사용자당 최대 1개)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 사용자 역할
    pub role: UserRole,
    /// 비밀번호 재설정 토큰 (hex 인코딩)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,
    /// 재설정 토큰 만료 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_token_expires: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
    /// 소프트 삭제 시각 (모든 조회에서 제외됨)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: email.to_lowercase(),
            password: Some(password_hash),
            name,
            provider: AuthProvider::Local,
            google_id: None,
            refresh_token: None,
            role: UserRole::User,
            reset_password_token: None,
            reset_password_token_expires: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 새 Google OAuth 사용자 생성
    ///
    /// Google 프로필 정보로 계정을 자동 생성합니다. 비밀번호가 없으므로
    /// 로컬 로그인은 불가능하며 Google 로그인만 허용됩니다.
    pub fn new_google(email: String, name: String, google_id: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: email.to_lowercase(),
            password: None,
            name,
            provider: AuthProvider::Google,
            google_id: Some(google_id),
            refresh_token: None,
            role: UserRole::User,
            reset_password_token: None,
            reset_password_token_expires: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 사용자인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.provider, AuthProvider::Local)
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password.is_some()
    }

    /// 소프트 삭제된 사용자인지 확인
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "Alice@Example.com".to_string(),
            "Alice".to_string(),
            "$argon2id$hash".to_string(),
        );

        // 이메일은 소문자로 정규화되어야 합니다.
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.provider, AuthProvider::Local);
        assert_eq!(user.role, UserRole::User);
        assert!(user.can_authenticate_with_password());
        assert!(user.google_id.is_none());
        assert!(user.refresh_token.is_none());
        assert!(!user.is_deleted());
    }

    #[test]
    fn test_new_google_user() {
        let user = User::new_google(
            "bob@gmail.com".to_string(),
            "Bob".to_string(),
            "google-sub-123".to_string(),
        );

        assert_eq!(user.provider, AuthProvider::Google);
        assert_eq!(user.google_id.as_deref(), Some("google-sub-123"));
        // Google 사용자는 비밀번호가 없어 로컬 로그인이 불가능합니다.
        assert!(user.password.is_none());
        assert!(!user.can_authenticate_with_password());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, UserRole::User);
    }
}
