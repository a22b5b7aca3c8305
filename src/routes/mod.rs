//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자 관리 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트 그룹에 따라 다른 인증 레벨을 적용합니다:
//!
//! - 로그인/회원가입/비밀번호 재설정: 인증 불필요
//! - 로그아웃, 내 정보 조회, 수정/삭제: `AuthMiddleware::required()`
//! - 사용자 목록/개별 조회: `AuthMiddleware::required_with_role("admin")`

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## Public (인증 불필요)
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
/// - `POST /api/v1/auth/refresh` - 액세스 토큰 갱신
/// - `GET /api/v1/auth/google/login` - Google OAuth 로그인 URL
/// - `GET /api/v1/auth/google/callback` - Google OAuth 콜백
/// - `POST /api/v1/auth/forgot-password` - 비밀번호 재설정 요청
/// - `POST /api/v1/auth/reset-password` - 비밀번호 재설정 수행
///
/// ## Protected (인증 필요)
/// - `POST /api/v1/auth/logout` - 세션 무효화
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::local_login)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::google_login_url)
            .service(handlers::auth::google_oauth_callback)
            .service(handlers::auth::forgot_password)
            .service(handlers::auth::reset_password)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::logout),
            ),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public (인증 불필요)
/// - `POST /api/v1/users` - 회원가입
///
/// ## Protected (인증 필요)
/// - `GET /api/v1/users/me` - 내 정보 조회
/// - `PATCH /api/v1/users/{id}` - 수정 (본인 또는 관리자)
/// - `DELETE /api/v1/users/{id}` - 삭제 (본인 또는 관리자)
///
/// ## Admin (admin 역할 필요)
/// - `GET /api/v1/users/admin` - 사용자 목록
/// - `GET /api/v1/users/admin/{id}` - 사용자 조회
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .service(handlers::users::list_users)
                    .service(handlers::users::get_user),
            )
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::users::get_me)
                    .service(handlers::users::update_user)
                    .service(handlers::users::delete_user),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
