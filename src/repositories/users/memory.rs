//! 테스트용 인메모리 사용자 저장소
//!
//! `Mutex<Vec<User>>` 위에 [`UserStore`]를 구현하여 MongoDB 없이
//! 서비스 계층의 흐름을 검증할 수 있게 합니다. 소프트 삭제 필터와
//! 재설정 토큰 만료 검사 등 리포지토리의 조회 규칙을 그대로 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime, Document};

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserStore;

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<T>(&self, f: impl FnOnce(&mut Vec<User>) -> T) -> T {
        let mut users = self.users.lock().unwrap();
        f(&mut users)
    }

    fn matches_id(user: &User, id: &str) -> bool {
        user.id_string().as_deref() == Some(id)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_lowercase();
        Ok(self.with_users(|users| {
            users
                .iter()
                .find(|u| u.email == email && !u.is_deleted())
                .cloned()
        }))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.with_users(|users| {
            users
                .iter()
                .find(|u| Self::matches_id(u, id) && !u.is_deleted())
                .cloned()
        }))
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.with_users(|users| {
            users
                .iter()
                .find(|u| u.google_id.as_deref() == Some(google_id) && !u.is_deleted())
                .cloned()
        }))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.with_users(|users| {
            users.iter().filter(|u| !u.is_deleted()).cloned().collect()
        }))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        self.with_users(|users| users.push(user.clone()));

        Ok(user)
    }

    async fn update(&self, id: &str, update_doc: Document) -> Result<Option<User>, AppError> {
        Ok(self.with_users(|users| {
            let user = users
                .iter_mut()
                .find(|u| Self::matches_id(u, id) && !u.is_deleted())?;

            if let Ok(name) = update_doc.get_str("name") {
                user.name = name.to_string();
            }
            user.updated_at = DateTime::now();

            Some(user.clone())
        }))
    }

    async fn soft_delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.with_users(|users| {
            match users
                .iter_mut()
                .find(|u| Self::matches_id(u, id) && !u.is_deleted())
            {
                Some(user) => {
                    user.deleted_at = Some(DateTime::now());
                    true
                }
                None => false,
            }
        }))
    }

    async fn save_refresh_token(&self, user_id: &str, token: &str) -> Result<(), AppError> {
        self.with_users(|users| {
            if let Some(user) = users.iter_mut().find(|u| Self::matches_id(u, user_id)) {
                user.refresh_token = Some(token.to_string());
            }
        });
        Ok(())
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, AppError> {
        Ok(self.with_users(|users| {
            users
                .iter()
                .find(|u| u.refresh_token.as_deref() == Some(token) && !u.is_deleted())
                .cloned()
        }))
    }

    async fn remove_refresh_token(&self, user_id: &str) -> Result<(), AppError> {
        self.with_users(|users| {
            if let Some(user) = users.iter_mut().find(|u| Self::matches_id(u, user_id)) {
                user.refresh_token = None;
            }
        });
        Ok(())
    }

    async fn set_password_reset_token(
        &self,
        user_id: &str,
        token: &str,
        expires_at: DateTime,
    ) -> Result<(), AppError> {
        self.with_users(|users| {
            if let Some(user) = users.iter_mut().find(|u| Self::matches_id(u, user_id)) {
                user.reset_password_token = Some(token.to_string());
                user.reset_password_token_expires = Some(expires_at);
            }
        });
        Ok(())
    }

    async fn find_by_password_reset_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let now = DateTime::now();
        Ok(self.with_users(|users| {
            users
                .iter()
                .find(|u| {
                    u.reset_password_token.as_deref() == Some(token)
                        && u.reset_password_token_expires
                            .map(|expires| expires > now)
                            .unwrap_or(false)
                        && !u.is_deleted()
                })
                .cloned()
        }))
    }

    async fn reset_password_and_clear_token(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        self.with_users(|users| {
            if let Some(user) = users.iter_mut().find(|u| Self::matches_id(u, user_id)) {
                user.password = Some(password_hash.to_string());
                user.reset_password_token = None;
                user.reset_password_token_expires = None;
            }
        });
        Ok(())
    }
}
