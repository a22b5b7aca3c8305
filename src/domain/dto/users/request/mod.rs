//! 사용자/인증 요청 DTO 모듈

pub mod auth_request;
pub mod create_user;
pub mod update_user;

pub use auth_request::*;
pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
