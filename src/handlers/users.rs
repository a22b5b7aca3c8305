//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 등록 | 201 Created |
//! | `GET` | `/users/admin` | 사용자 목록 조회 (관리자) | 200 OK |
//! | `GET` | `/users/admin/{id}` | 사용자 조회 (관리자) | 200 OK |
//! | `GET` | `/users/me` | 내 정보 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 정보 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 (soft delete) | 200 OK |
//!
//! 수정/삭제는 본인 또는 관리자만 가능합니다.
use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::{CreateUserRequest, UpdateUserRequest};
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 사용자 등록 핸들러
///
/// 로컬 계정을 생성합니다. 이미 존재하는 이메일이면 409를 반환합니다.
///
/// # Endpoint
/// `POST /users`
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.create_user(payload.into_inner()).await?;

    log::info!("사용자 등록: {}", response.email);

    Ok(HttpResponse::Created().json(json!({
        "data": response,
        "message": "User created",
        "code": "SUCCESS"
    })))
}

/// 사용자 목록 조회 핸들러 (관리자 전용)
///
/// # Endpoint
/// `GET /users/admin`
#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": users,
        "message": "User list",
        "code": "SUCCESS"
    })))
}

/// 내 정보 조회 핸들러
///
/// 인증된 사용자 자신의 최신 정보를 반환합니다.
///
/// # Endpoint
/// `GET /users/me`
#[get("/me")]
pub async fn get_me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": response,
        "message": "Current user",
        "code": "SUCCESS"
    })))
}

/// 사용자 조회 핸들러 (관리자 전용)
///
/// # Endpoint
/// `GET /users/admin/{user_id}`
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": response,
        "message": "User found",
        "code": "SUCCESS"
    })))
}

/// 사용자 정보 수정 핸들러
///
/// 본인 또는 관리자만 수정할 수 있습니다.
/// 허용된 필드(name)만 갱신됩니다.
///
/// # Endpoint
/// `PATCH /users/{id}`
#[patch("/{user_id}")]
pub async fn update_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    ensure_self_or_admin(&user, &user_id)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service
        .update_user(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": response,
        "message": "User updated",
        "code": "SUCCESS"
    })))
}

/// 사용자 삭제 핸들러 (soft delete)
///
/// 본인 또는 관리자만 삭제할 수 있습니다. 문서를 제거하지 않고
/// `deletedAt` 타임스탬프를 기록합니다.
///
/// # Endpoint
/// `DELETE /users/{id}`
#[delete("/{user_id}")]
pub async fn delete_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    ensure_self_or_admin(&user, &user_id)?;

    user_service.delete_user(&user_id).await?;

    log::info!("사용자 삭제: {}", user_id);

    Ok(HttpResponse::Ok().json(json!({
        "data": null,
        "message": "User deleted",
        "code": "SUCCESS"
    })))
}

/// 본인 또는 관리자인지 확인
fn ensure_self_or_admin(user: &AuthenticatedUser, target_id: &str) -> Result<(), AppError> {
    if user.user_id == target_id || user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Not allowed to modify this user".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated(user_id: &str, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user_id.to_string(),
            email: "user@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_self_can_modify_own_account() {
        let user = authenticated("abc123", "user");
        assert!(ensure_self_or_admin(&user, "abc123").is_ok());
    }

    #[test]
    fn test_other_user_cannot_modify() {
        let user = authenticated("abc123", "user");
        // 인증은 됐으므로 401이 아니라 403으로 구분되어야 합니다.
        let err = ensure_self_or_admin(&user, "def456").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_admin_can_modify_anyone() {
        let admin = authenticated("abc123", "admin");
        assert!(ensure_self_or_admin(&admin, "def456").is_ok());
    }
}
