//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 MongoDB에 영속되는 객체로, 고유 ID를 통해 식별됩니다.

pub mod users;
