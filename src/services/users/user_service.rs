//! 사용자 계정 서비스
//!
//! 회원 가입과 사용자 CRUD의 비즈니스 로직을 담당합니다.

use std::sync::Arc;

use mongodb::bson::doc;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::password_service::PasswordService;

/// 사용자 계정 서비스
pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    password_service: Arc<PasswordService>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserStore>, password_service: Arc<PasswordService>) -> Self {
        Self {
            user_repo,
            password_service,
        }
    }

    /// 새 로컬 사용자를 등록합니다.
    ///
    /// 비밀번호는 저장 전에 해싱되며, 이메일 중복 시 `ConflictError`
    /// (409)를 반환합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let password_hash = self.password_service.hash_password(&request.password)?;

        let user = User::new_local(request.email, request.name, password_hash);
        let created_user = self.user_repo.create(user).await?;

        log::info!("사용자 생성 완료: {}", created_user.email);

        Ok(UserResponse::from(created_user))
    }

    /// 전체 사용자 목록을 조회합니다.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자를 조회합니다.
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 프로필을 수정합니다.
    ///
    /// 허용 목록에 포함된 필드만 반영됩니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut update_doc = doc! {};

        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }

        if update_doc.is_empty() {
            return self.get_user_by_id(id).await;
        }

        let updated = self
            .user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자를 소프트 삭제합니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.soft_delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제 완료: {}", id);

        Ok(())
    }
}
