//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증/계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 `{ "data": null, "message": ..., "code": ... }` 형태의
//! JSON 응답으로 변환되어 클라이언트에게 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(data: LoginRequest) -> Result<TokenPair, AppError> {
//!     let user = user_repo.find_by_email(&data.email).await?
//!         .ok_or_else(|| AppError::InvalidLogin("Invalid email or password".to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 로그인 실패 (401 Unauthorized)
    ///
    /// 존재하지 않는 이메일과 잘못된 비밀번호는 구분 없이 동일한 에러를 반환합니다.
    #[error("{0}")]
    InvalidLogin(String),

    /// 리프레시 토큰 검증 실패 (401 Unauthorized)
    #[error("{0}")]
    InvalidRefreshToken(String),

    /// 인증되지 않은 요청 (401 Unauthorized)
    #[error("{0}")]
    Unauthenticated(String),

    /// 인증은 됐지만 권한이 부족한 요청 (403 Forbidden)
    #[error("{0}")]
    Forbidden(String),

    /// 액세스 토큰 검증 실패 (400 Bad Request)
    ///
    /// 서명 오류, 만료, 형식 오류 등 모든 검증 실패가 이 하나로 수렴됩니다.
    #[error("{0}")]
    InvalidToken(String),

    /// 비밀번호 재설정 토큰 검증 실패 (400 Bad Request)
    #[error("{0}")]
    InvalidResetToken(String),

    /// OAuth 프로필 정보 부족 (400 Bad Request)
    #[error("{0}")]
    InvalidProfile(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 이메일 중복 등 충돌 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달되는 기계 판독용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidLogin(_) => "INVALID_LOGIN",
            AppError::InvalidRefreshToken(_) => "INVALID_REFRESH_TOKEN",
            AppError::Unauthenticated(_) => "UNAUTHENTICATED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InvalidToken(_) => "INVALID_TOKEN",
            AppError::InvalidResetToken(_) => "INVALID_RESET_TOKEN",
            AppError::InvalidProfile(_) => "INVALID_PROFILE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "USER_NOT_FOUND",
            AppError::ConflictError(_) => "EMAIL_ALREADY_EXISTS",
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 표준 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::InvalidLogin(_)
            | AppError::InvalidRefreshToken(_)
            | AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidToken(_)
            | AppError::InvalidResetToken(_)
            | AppError::InvalidProfile(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // 예상치 못한 내부 에러의 상세 내용은 로그에만 남기고
        // 클라이언트에게는 일반화된 메시지를 노출합니다.
        let message = if status == actix_web::http::StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("내부 에러 발생: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "data": null,
            "message": message,
            "code": self.code(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_login_error_response() {
        let error = AppError::InvalidLogin("Invalid email or password".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), "INVALID_LOGIN");
    }

    #[test]
    fn test_invalid_refresh_token_error_response() {
        let error = AppError::InvalidRefreshToken("Invalid refresh token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), "INVALID_REFRESH_TOKEN");
    }

    #[test]
    fn test_forbidden_error_response() {
        let error = AppError::Forbidden("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
        assert_eq!(error.code(), "FORBIDDEN");
    }

    #[test]
    fn test_invalid_token_error_response() {
        let error = AppError::InvalidToken("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "INVALID_TOKEN");
    }

    #[test]
    fn test_invalid_reset_token_error_response() {
        let error = AppError::InvalidResetToken("Invalid or expired token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "INVALID_RESET_TOKEN");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert_eq!(error.code(), "USER_NOT_FOUND");
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
        assert_eq!(error.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
