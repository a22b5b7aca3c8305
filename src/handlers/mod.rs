//! # HTTP Handlers Module
//!
//! API 경계에서 요청을 받아 서비스 계층으로 위임하는 핸들러들입니다.
//! 핸들러는 다음 책임만 가집니다:
//!
//! 1. 요청 DTO 역직렬화 및 `validator` 검증
//! 2. `web::Data`로 주입된 서비스 호출
//! 3. 응답 봉투(`{data, message, code}`) 구성
//!
//! 비즈니스 로직은 전부 서비스 계층에 있으며, 핸들러에는 조건 분기를
//! 최소화합니다. 에러는 `AppError`의 `ResponseError` 구현이
//! HTTP 상태 코드와 에러 봉투로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 로그인, 토큰 갱신, 로그아웃, Google OAuth, 비밀번호 재설정
//! - [`users`] - 회원가입 및 사용자 CRUD

pub mod auth;
pub mod users;
