//! 사용자/인증 응답 DTO 모듈

pub mod user_response;
pub mod google_oauth_response;

pub use user_response::UserResponse;
pub use google_oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse};
