//! 계정 인증 서비스
//!
//! Rust 기반의 인증 및 사용자 관리 서비스입니다.
//! JWT 토큰 기반 인증, Google OAuth 2.0 소셜 로그인,
//! 이메일 기반 비밀번호 재설정을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 계정 생성, 프로필 관리, soft delete
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google 소셜 로그인 지원
//! - **비밀번호 재설정**: 이메일로 전송되는 일회성 재설정 토큰
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스는 생성자에서 의존성을 받아 `Arc`로 공유되며,
//! ActixWeb의 `web::Data`를 통해 핸들러에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service::db::Database;
//! use account_service::repositories::users::user_repo::UserRepository;
//! use account_service::services::auth::{AuthService, PasswordService, TokenService};
//!
//! let database = Database::new().await?;
//! let user_repo = Arc::new(UserRepository::new(&database));
//! let token_service = Arc::new(TokenService::new());
//! let password_service = Arc::new(PasswordService::new()?);
//!
//! let auth_service = AuthService::new(user_repo, token_service, password_service);
//! let tokens = auth_service.login("user@example.com", "password").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
