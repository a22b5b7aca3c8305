//! OAuth 통합 모델
//!
//! 외부 OAuth 프로바이더와의 통신에 사용되는 모델들입니다.

pub mod google_oauth_model;
