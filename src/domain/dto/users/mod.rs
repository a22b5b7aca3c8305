//! # User Data Transfer Objects Module
//!
//! 사용자/인증 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
