//! 비밀번호 해싱 서비스
//!
//! Argon2id 기반의 메모리 하드 해싱을 제공합니다. 해시 문자열은
//! PHC 형식으로 저장되어 파라미터와 솔트가 함께 보존됩니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
};

use crate::config::PasswordConfig;
use crate::errors::errors::{AppError, ErrorContext};

/// 비밀번호 해싱/검증 서비스
///
/// 환경별 Argon2 파라미터로 초기화되며, 상태가 없어 자유롭게 공유됩니다.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// 환경 설정 기반의 Argon2id 파라미터로 서비스를 생성합니다.
    pub fn new() -> Result<Self, AppError> {
        Self::with_params(
            PasswordConfig::argon2_memory_kib(),
            PasswordConfig::argon2_iterations(),
        )
    }

    /// 명시적 파라미터로 서비스를 생성합니다.
    pub(crate) fn with_params(memory_kib: u32, iterations: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .context("Argon2 파라미터 오류")?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// 호출마다 새로운 랜덤 솔트를 생성하므로 동일한 비밀번호라도
    /// 매번 다른 해시가 생성됩니다.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .context("비밀번호 해싱 실패")
    }

    /// 평문 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// 비밀번호 불일치는 `Ok(false)`로, 해시 형식 손상 등 시스템 오류는
    /// `Err`로 구분하여 반환합니다.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해시 형식 오류: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::InternalError(format!(
                "비밀번호 검증 실패: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        // 테스트는 개발 환경과 동일한 저비용 파라미터를 사용합니다.
        PasswordService::with_params(8 * 1024, 2).unwrap()
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let svc = service();
        let hash = svc.hash_password("CorrectHorse1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(svc.verify_password("CorrectHorse1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let svc = service();
        let hash = svc.hash_password("CorrectHorse1").unwrap();

        assert!(!svc.verify_password("WrongPassword1", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let svc = service();

        let result = svc.verify_password("whatever", "not-a-phc-string");
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_salts_produce_distinct_hashes() {
        let svc = service();
        let first = svc.hash_password("CorrectHorse1").unwrap();
        let second = svc.hash_password("CorrectHorse1").unwrap();

        assert_ne!(first, second);
        assert!(svc.verify_password("CorrectHorse1", &second).unwrap());
    }
}
