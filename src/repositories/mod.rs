//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 컬렉션별 리포지토리 구조체가
//! 컬렉션 핸들을 소유합니다. 리포지토리는 서버 기동 시 한 번 생성되어
//! `Arc`로 서비스 계층에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
