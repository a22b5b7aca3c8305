//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, 비밀번호 재설정, 메일 발송 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_ACCESS_SECRET="your-access-token-secret"
//! export JWT_REFRESH_SECRET="your-refresh-token-secret"
//! ```
//!
//! ### SMTP 설정
//! ```bash
//! export SMTP_HOST="smtp.gmail.com"
//! export SMTP_USERNAME="noreply@example.com"
//! export SMTP_PASSWORD="app-password"
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// 이 URI는 Google Cloud Console의 승인된 리디렉션 URI 목록에
    /// 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI").expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google 사용자 프로필 조회 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://www.googleapis.com/oauth2/v2/userinfo`
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 액세스 토큰과 리프레시 토큰은 서로 독립된 비밀키로 서명됩니다.
/// 한쪽 키가 유출되어도 다른 토큰 클래스는 영향을 받지 않습니다.
///
/// ## 권장 설정값
///
/// - 액세스 토큰: 15분 (900초)
/// - 리프레시 토큰: 7일
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "access_secret_key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn access_secret() -> String {
        env::var("JWT_ACCESS_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_ACCESS_SECRET not set, using default (not secure for production!)");
            "access_secret_key".to_string()
        })
    }

    /// 리프레시 토큰 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 액세스 토큰 키와 반드시 다른 값을 사용해야 합니다.
    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
            "refresh_secret_key".to_string()
        })
    }

    /// 액세스 토큰의 만료 시간을 초 단위로 반환합니다.
    ///
    /// 기본값: 900초 (15분)
    pub fn access_expiration_secs() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_SECS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900)
    }

    /// 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 기본값: 7일
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// 비밀번호 재설정 설정
pub struct PasswordResetConfig;

impl PasswordResetConfig {
    /// 재설정 토큰의 유효 기간을 분 단위로 반환합니다.
    ///
    /// 기본값: 60분
    pub fn token_ttl_minutes() -> i64 {
        env::var("RESET_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60)
    }
}

/// SMTP 메일 발송 설정
///
/// 비밀번호 재설정 메일 발송에 사용됩니다.
pub struct SmtpConfig;

impl SmtpConfig {
    /// SMTP 릴레이 호스트를 반환합니다. 기본값: "smtp.gmail.com"
    pub fn host() -> String {
        env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string())
    }

    /// SMTP 인증 계정을 반환합니다.
    ///
    /// # Panics
    ///
    /// `SMTP_USERNAME` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn username() -> String {
        env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set")
    }

    /// SMTP 인증 비밀번호를 반환합니다.
    ///
    /// # Panics
    ///
    /// `SMTP_PASSWORD` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn password() -> String {
        env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set")
    }

    /// 발신자 주소를 반환합니다. 미설정 시 SMTP_USERNAME을 사용합니다.
    pub fn from_address() -> String {
        env::var("SMTP_FROM").unwrap_or_else(|_| Self::username())
    }
}

/// 지원하는 인증 공급자를 나타내는 열거형
///
/// 사용자 문서의 `provider` 필드로 저장되며, `serde`를 통해
/// 소문자 문자열("local", "google")로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증
    ///
    /// Argon2id를 사용한 패스워드 해싱 기반의 전통적인 인증 방식입니다.
    Local,

    /// Google OAuth 2.0 인증
    ///
    /// Google 계정을 통한 소셜 로그인입니다. 비밀번호 없이
    /// `google_id`로 사용자를 식별합니다.
    Google,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원되는 값
    ///
    /// - `"local"` → `AuthProvider::Local`
    /// - `"google"` → `AuthProvider::Google`
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthProvider)` - 유효한 프로바이더인 경우
    /// * `Err(String)` - 지원하지 않는 프로바이더인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}
