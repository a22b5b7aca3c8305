//! 인증 컨텍스트 모델
//!
//! 미들웨어가 검증한 토큰에서 추출한 사용자 정보와
//! 라우트별 인증 요구사항을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;
