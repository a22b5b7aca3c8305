//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! # 인증 미들웨어 (AuthMiddleware)
//!
//! - Authorization 헤더에서 Bearer 토큰 추출 및 검증
//! - 검증된 사용자 정보를 request extensions에 저장
//! - 선택적/강제 인증 모드와 역할 기반 접근 제어 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/users")
//!     .wrap(AuthMiddleware::required())
//!     .service(get_me);
//!
//! web::scope("/api/v1/users/admin")
//!     .wrap(AuthMiddleware::required_with_role("admin"))
//!     .service(list_users);
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
