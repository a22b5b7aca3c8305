//! Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Grant 플로우를 구현합니다.
//!
//! ```text
//! 1. get_login_url()        → 사용자를 Google 인증 페이지로 리다이렉트
//! 2. (Google 콜백)          → authorization code 수신
//! 3. authenticate_with_code → code를 토큰으로 교환, 프로필 조회,
//!                             계정 조회 또는 자동 생성
//! ```
//!
//! 처음 로그인하는 Google 사용자는 비밀번호 없는 계정으로
//! 자동 생성됩니다.

use std::sync::Arc;

use crate::config::GoogleOAuthConfig;
use crate::domain::dto::users::response::google_oauth_response::{
    GoogleTokenResponse, OAuthLoginUrlResponse,
};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::google_oauth_model::google_user::GoogleUserInfo;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserStore;

/// Google OAuth 인증 서비스
pub struct GoogleAuthService {
    user_repo: Arc<dyn UserStore>,
    http_client: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(user_repo: Arc<dyn UserStore>) -> Self {
        Self {
            user_repo,
            http_client: reqwest::Client::new(),
        }
    }

    /// Google OAuth 로그인 URL을 생성합니다.
    ///
    /// OAuth 2.0 Authorization Code Grant 플로우의 첫 단계로,
    /// 클라이언트가 브라우저를 리다이렉트할 URL을 반환합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=...&redirect_uri=...&
    ///   scope=openid%20email%20profile&response_type=code
    /// ```
    pub fn get_login_url(&self) -> OAuthLoginUrlResponse {
        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
        ];

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        OAuthLoginUrlResponse {
            login_url: format!("{}?{}", GoogleOAuthConfig::auth_uri(), query),
        }
    }

    /// Authorization code로 사용자를 인증합니다.
    ///
    /// code를 액세스 토큰으로 교환하고, 프로필을 조회한 뒤
    /// `google_id`로 기존 계정을 찾습니다. 계정이 없으면 자동
    /// 생성합니다.
    ///
    /// 프로필에 email 또는 name이 없으면 `InvalidProfile`을 반환합니다.
    pub async fn authenticate_with_code(&self, auth_code: &str) -> Result<User, AppError> {
        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        let email = google_user.email.clone().ok_or_else(|| {
            AppError::InvalidProfile("Google 프로필에 이메일이 없습니다".to_string())
        })?;
        let name = google_user.name.clone().ok_or_else(|| {
            AppError::InvalidProfile("Google 프로필에 이름이 없습니다".to_string())
        })?;

        match self.user_repo.find_by_google_id(&google_user.id).await? {
            Some(existing_user) => {
                log::info!("Google 사용자 로그인: {}", existing_user.email);
                Ok(existing_user)
            }
            None => {
                log::info!("새 Google 사용자 등록: {}", email);
                self.user_repo
                    .create(User::new_google(email, name, google_user.id))
                    .await
            }
        }
    }

    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=...&client_id=...&client_secret=...&
    /// redirect_uri=...&grant_type=authorization_code
    /// ```
    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http_client
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response.json::<GoogleTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e))
        })
    }

    /// Google UserInfo 엔드포인트로 사용자 프로필을 조회합니다.
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self
            .http_client
            .get(GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 프로필 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 프로필 조회 실패: {}",
                error_text
            )));
        }

        response.json::<GoogleUserInfo>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Google 프로필 응답 파싱 실패: {}", e))
        })
    }
}
