//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB 기반 사용자
//! 데이터 관리와 세션/재설정 토큰 저장을 제공합니다.

pub mod user_repo;

#[cfg(test)]
pub mod memory;
