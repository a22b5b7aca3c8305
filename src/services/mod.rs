//! 애플리케이션 서비스 계층
//!
//! 리포지토리와 외부 시스템을 조합하여 비즈니스 로직을 수행합니다.
//! 모든 서비스는 서버 기동 시 생성자에서 의존성을 주입받아 조립되며,
//! `Arc`로 핸들러에 공유됩니다.

pub mod auth;
pub mod mail;
pub mod users;
