//! # Domain Models Module
//!
//! 영속 대상이 아닌 도메인 모델들을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 미들웨어가 주입하는 인증 컨텍스트 모델
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`oauth`] - Google OAuth 2.0 통합 모델

pub mod auth;
pub mod oauth;
pub mod token;
