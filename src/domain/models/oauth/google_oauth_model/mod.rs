//! Google OAuth 2.0 통합 모델

pub mod google_user;
