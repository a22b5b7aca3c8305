//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 요청 DTO 검증
//!
//! 모든 요청 DTO는 `validator` derive를 사용하여 핸들러 진입 시점에
//! 형식 검증을 수행합니다. 중복 이메일 같은 비즈니스 규칙 검증은
//! 서비스 계층의 책임입니다.
//!
//! ### 2. 허용 목록 기반 응답 매핑
//!
//! 응답 DTO는 엔티티에서 노출해도 되는 필드만 명시적으로 복사합니다.
//! 비밀번호 해시, 리프레시 토큰, 재설정 토큰은 어떤 응답에도
//! 포함되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! async fn create_user(req: web::Json<CreateUserRequest>) -> AppResult<HttpResponse> {
//!     req.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```

pub mod users;

pub use users::*;
