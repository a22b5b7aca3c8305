//! JWT 토큰 발급/검증 서비스
//!
//! 액세스 토큰과 리프레시 토큰을 HS256으로 서명합니다. 두 토큰 클래스는
//! 서로 독립된 비밀키를 사용하므로 한쪽 키로 다른 클래스의 토큰을
//! 검증할 수 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::token::token::{TokenClaims, TokenPair};
use crate::errors::errors::AppError;

/// JWT 토큰 서비스
///
/// 상태가 없으며, 비밀키는 호출 시점에 설정에서 읽습니다.
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// 사용자 정보로부터 클레임을 구성합니다.
    fn build_claims(user: &User, ttl: Duration) -> Result<TokenClaims, AppError> {
        let now = Utc::now();
        let expiration = now + ttl;

        Ok(TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// 액세스 토큰을 생성합니다. (기본 900초 유효)
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let claims = Self::build_claims(
            user,
            Duration::seconds(JwtConfig::access_expiration_secs()),
        )?;

        let encoding_key = EncodingKey::from_secret(JwtConfig::access_secret().as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 리프레시 토큰을 생성합니다. (기본 7일 유효)
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        let claims = Self::build_claims(
            user,
            Duration::days(JwtConfig::refresh_expiration_days()),
        )?;

        let encoding_key = EncodingKey::from_secret(JwtConfig::refresh_secret().as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 액세스/리프레시 토큰 쌍을 생성합니다.
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in: JwtConfig::access_expiration_secs(),
        })
    }

    /// 액세스 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 만료, 서명 오류, 형식 오류 등 모든 실패는 단일한
    /// `InvalidToken` 에러로 수렴합니다. 실패 원인은 클라이언트에게
    /// 구분하여 노출하지 않습니다.
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::verify_with_secret(token, &JwtConfig::access_secret())
            .map_err(|_| AppError::InvalidToken("Invalid token".to_string()))
    }

    /// 리프레시 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 액세스 토큰과 마찬가지로 모든 실패가 단일 에러로 수렴합니다.
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::verify_with_secret(token, &JwtConfig::refresh_secret())
            .map_err(|_| AppError::InvalidRefreshToken("Invalid refresh token".to_string()))
    }

    fn verify_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
    }

    /// Authorization 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            Ok(token)
        } else {
            Err(AppError::Unauthenticated(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}
