//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 영속 대상)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 토큰, 인증 컨텍스트, 외부 시스템 통합 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 영속 객체입니다. 사용자 계정과 그에 딸린
//! 세션/재설정 토큰 상태를 표현합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 사용되는 요청/응답 구조체입니다. 요청 DTO는 `validator`
//! 검증을 수행하고, 응답 DTO는 허용 목록 방식으로 엔티티 필드를
//! 명시적으로 매핑하여 비밀번호 해시나 토큰이 노출되지 않도록 합니다.
//!
//! ### [`models`] - 인증/통합 모델
//!
//! JWT 클레임, 인증된 사용자 컨텍스트, Google OAuth 응답 모델 등
//! 영속 대상이 아닌 도메인 모델들입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
