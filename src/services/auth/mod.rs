//! 인증 서비스 모듈
//!
//! 자격 증명 검증, 토큰 발급, Google OAuth, 비밀번호 재설정 등
//! 인증과 관련된 비즈니스 로직을 담당합니다.

pub mod auth_service;
pub mod google_auth_service;
pub mod password_reset_service;
pub mod password_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use google_auth_service::GoogleAuthService;
pub use password_reset_service::PasswordResetService;
pub use password_service::PasswordService;
pub use token_service::TokenService;
