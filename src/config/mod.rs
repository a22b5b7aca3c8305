//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - 인증, OAuth, JWT, SMTP 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 패닉
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_ACCESS_SECRET="your-access-secret"
//! export JWT_REFRESH_SECRET="your-refresh-secret"
//!
//! # Google OAuth (사용 시)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/api/v1/auth/google/callback"
//!
//! # SMTP (비밀번호 재설정 메일)
//! export SMTP_USERNAME="noreply@example.com"
//! export SMTP_PASSWORD="app-password"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export ARGON2_MEMORY_KIB="19456"
//! export RESET_TOKEN_TTL_MINUTES="60"
//! export FRONTEND_URL="https://app.example.com"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
