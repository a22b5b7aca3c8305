//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로컬 인증과 Google OAuth 2.0 인증을 지원하며, JWT 기반 세션을 관리합니다.
//!
//! # Endpoints
//!
//! - **로컬 로그인**: `POST /auth/login`
//! - **토큰 갱신**: `POST /auth/refresh`
//! - **로그아웃**: `POST /auth/logout`
//! - **Google OAuth**: `GET /auth/google/login`, `GET /auth/google/callback`
//! - **비밀번호 재설정**: `POST /auth/forgot-password`, `POST /auth/reset-password`
//!
//! # Refresh Token 쿠키
//!
//! 리프레시 토큰은 `refreshToken` HttpOnly 쿠키로 전달됩니다.
//! 액세스 토큰만 응답 본문에 포함되며, 프로덕션 환경에서는 Secure 플래그가 설정됩니다.
use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    get, post, web, HttpRequest, HttpResponse,
};
use serde_json::json;
use validator::Validate;

use crate::config::{Environment, JwtConfig};
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::{
    ForgotPasswordRequest, LocalLoginRequest, OAuthCallbackQuery, RefreshTokenRequest,
    ResetPasswordRequest, UserResponse,
};
use crate::errors::errors::AppError;
use crate::services::auth::{AuthService, GoogleAuthService, PasswordResetService};

/// 리프레시 토큰 쿠키 이름
const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// 리프레시 토큰을 담는 HttpOnly 쿠키 생성
fn build_refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, token)
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(CookieDuration::days(JwtConfig::refresh_expiration_days()))
        .secure(Environment::current().is_production())
        .finish()
}

/// 리프레시 토큰 쿠키 삭제용 만료 쿠키 생성
fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, "")
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(CookieDuration::seconds(0))
        .secure(Environment::current().is_production())
        .finish()
}

/// 로컬 로그인 핸들러
///
/// 이메일과 패스워드로 사용자를 인증하고 JWT 토큰 쌍을 발급합니다.
/// 리프레시 토큰은 쿠키로, 액세스 토큰은 응답 본문으로 전달됩니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_pair = auth_service.login(&payload.email, &payload.password).await?;

    log::info!("로컬 로그인 성공: {}", payload.email);

    let session_token = token_pair
        .refresh_token
        .ok_or_else(|| AppError::InternalError("Refresh token missing from pair".to_string()))?;

    Ok(HttpResponse::Ok()
        .cookie(build_refresh_cookie(session_token))
        .json(json!({
            "data": {
                "access_token": token_pair.access_token,
                "expires_in": token_pair.expires_in,
                "token_type": "Bearer"
            },
            "message": "Login success",
            "code": "SUCCESS"
        })))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새로운 액세스 토큰을 발급합니다.
/// 토큰은 `refreshToken` 쿠키에서 먼저 찾고, 없으면 요청 본문에서 찾습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let rt = extract_refresh_token(&req, body.as_deref())?;

    let token_pair = auth_service.refresh(&rt).await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": {
            "access_token": token_pair.access_token,
            "expires_in": token_pair.expires_in,
            "token_type": "Bearer"
        },
        "message": "Token refreshed",
        "code": "SUCCESS"
    })))
}

/// 로그아웃 핸들러
///
/// 저장된 리프레시 토큰을 제거하여 세션을 무효화하고 쿠키를 삭제합니다.
/// 이미 로그아웃된 상태여도 동일하게 성공을 반환합니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    auth_service.logout(&user.user_id).await?;

    log::info!("로그아웃: {}", user.email);

    Ok(HttpResponse::Ok()
        .cookie(clear_refresh_cookie())
        .json(json!({
            "data": null,
            "message": "Logged out successfully",
            "code": "SUCCESS"
        })))
}

/// Google OAuth 로그인 URL 생성 핸들러
///
/// Google OAuth 2.0 인증을 시작하기 위한 인증 URL을 반환합니다.
///
/// # Endpoint
/// `GET /auth/google/login`
#[get("/google/login")]
pub async fn google_login_url(
    google_service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let url_response = google_service.get_login_url();

    Ok(HttpResponse::Ok().json(json!({
        "data": url_response,
        "message": "Google login URL generated",
        "code": "SUCCESS"
    })))
}

/// Google OAuth 콜백 처리 핸들러
///
/// Google 인증 완료 후 리다이렉트되는 콜백을 처리합니다.
/// 인가 코드를 토큰으로 교환하고, 프로필 조회 후 세션을 발급합니다.
///
/// # Endpoint
/// `GET /auth/google/callback?code={code}`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
    google_service: web::Data<GoogleAuthService>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 거부했거나 Google 측 에러가 발생한 경우
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth authentication was cancelled or failed");
        log::warn!("Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::InvalidLogin(error_msg.to_string()));
    }

    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 에러 없이 code도 없는 콜백은 잘못된 요청입니다.
    let code = query.code.as_deref().ok_or_else(|| {
        AppError::ValidationError("Authorization code가 필요합니다".to_string())
    })?;

    let user = google_service.authenticate_with_code(code).await?;
    let token_pair = auth_service.issue_session(&user).await?;

    log::info!("Google OAuth 로그인 성공: {}", user.email);

    let session_token = token_pair
        .refresh_token
        .ok_or_else(|| AppError::InternalError("Refresh token missing from pair".to_string()))?;

    let user_response = UserResponse::from(user);

    Ok(HttpResponse::Ok()
        .cookie(build_refresh_cookie(session_token))
        .json(json!({
            "data": {
                "user": user_response,
                "access_token": token_pair.access_token,
                "expires_in": token_pair.expires_in,
                "token_type": "Bearer"
            },
            "message": "Login success",
            "code": "SUCCESS"
        })))
}

/// 비밀번호 재설정 요청 핸들러
///
/// 재설정 토큰을 생성하여 메일로 발송합니다. 이메일 존재 여부와 관계없이
/// 동일한 응답을 반환하여 계정 존재 여부를 노출하지 않습니다.
///
/// # Endpoint
/// `POST /auth/forgot-password`
#[post("/forgot-password")]
pub async fn forgot_password(
    payload: web::Json<ForgotPasswordRequest>,
    reset_service: web::Data<PasswordResetService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    reset_service.request_password_reset(&payload.email).await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": null,
        "message": "If this email exists, a reset link has been sent.",
        "code": "SUCCESS"
    })))
}

/// 비밀번호 재설정 수행 핸들러
///
/// 재설정 토큰을 검증하고 새 비밀번호로 교체합니다.
/// 토큰은 일회성이며, 사용 즉시 무효화됩니다.
///
/// # Endpoint
/// `POST /auth/reset-password`
#[post("/reset-password")]
pub async fn reset_password(
    payload: web::Json<ResetPasswordRequest>,
    reset_service: web::Data<PasswordResetService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    reset_service
        .reset_password(&payload.token, &payload.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "data": null,
        "message": "Password has been reset successfully.",
        "code": "SUCCESS"
    })))
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 쿠키를 먼저 확인하고, 없으면 요청 본문을 확인합니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    if let Some(cookie) = req.cookie(REFRESH_COOKIE_NAME) {
        let token = cookie.value().trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    if let Some(body) = body {
        if !body.refresh_token.is_empty() {
            return Ok(body.refresh_token.clone());
        }
    }

    Err(AppError::InvalidRefreshToken(
        "Refresh token not provided".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;

    use crate::repositories::users::memory::InMemoryUserStore;
    use crate::services::auth::{PasswordService, TokenService};

    #[actix_web::test]
    async fn test_google_callback_with_error_only_is_rejected() {
        // 사용자가 동의를 거부하면 Google은 code 없이 error만 붙여
        // 리다이렉트합니다. 이 요청은 쿼리 추출 단계에서 실패하지 않고
        // 401 응답으로 처리되어야 합니다.
        let store = Arc::new(InMemoryUserStore::new());
        let auth_service = AuthService::new(
            store.clone(),
            Arc::new(TokenService::new()),
            Arc::new(PasswordService::with_params(8 * 1024, 2).unwrap()),
        );
        let google_service = GoogleAuthService::new(store);

        let app = init_service(
            App::new()
                .app_data(web::Data::new(auth_service))
                .app_data(web::Data::new(google_service))
                .service(google_oauth_callback),
        )
        .await;

        let req = TestRequest::get()
            .uri("/google/callback?error=access_denied")
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_LOGIN");
        assert!(body["data"].is_null());
    }

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = build_refresh_cookie("sample_token".to_string());

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "sample_token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(CookieDuration::days(7)));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie();

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(0)));
    }
}
