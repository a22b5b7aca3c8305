//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// match env {
    ///     Environment::Development => println!("개발 환경"),
    ///     Environment::Production => println!("프로덕션 환경"),
    ///     _ => {}
    /// }
    /// ```
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()))
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경 여부를 반환합니다.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
///
/// Argon2id 파라미터를 환경별로 관리합니다. 테스트/개발 환경에서는
/// 낮은 메모리 비용으로 빠른 처리를, 프로덕션에서는 높은 비용을 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 Argon2 메모리 비용(KiB)을 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 8 MiB (빠른 처리)
    /// - Staging/Production: 19 MiB (OWASP 권장값)
    pub fn argon2_memory_kib() -> u32 {
        if let Ok(cost_str) = env::var("ARGON2_MEMORY_KIB") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if cost >= 1024 {
                    return cost;
                }
            }
        }

        Self::argon2_memory_kib_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 Argon2 메모리 비용을 반환합니다.
    pub fn argon2_memory_kib_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 8 * 1024,
            Environment::Staging | Environment::Production => 19 * 1024,
        }
    }

    /// Argon2 반복 횟수를 반환합니다. 기본값: 2
    pub fn argon2_iterations() -> u32 {
        env::var("ARGON2_ITERATIONS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 비밀번호 재설정 링크 생성에 사용할 프론트엔드 기본 URL을 반환합니다.
    ///
    /// 기본값: "http://localhost:3000"
    pub fn frontend_url() -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_argon2_memory_for_each_environment() {
        assert_eq!(
            PasswordConfig::argon2_memory_kib_for_env(&Environment::Development),
            8 * 1024
        );
        assert_eq!(
            PasswordConfig::argon2_memory_kib_for_env(&Environment::Test),
            8 * 1024
        );
        assert_eq!(
            PasswordConfig::argon2_memory_kib_for_env(&Environment::Staging),
            19 * 1024
        );
        assert_eq!(
            PasswordConfig::argon2_memory_kib_for_env(&Environment::Production),
            19 * 1024
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
