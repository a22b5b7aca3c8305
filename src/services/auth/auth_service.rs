//! 인증 오케스트레이터 서비스
//!
//! 자격 증명 검증, 토큰 발급, 세션 저장을 조합하여
//! 로그인/로그아웃/토큰 갱신의 전체 흐름을 담당합니다.

use std::sync::Arc;

use crate::domain::entities::users::user::User;
use crate::domain::token::token::TokenPair;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::password_service::PasswordService;
use crate::services::auth::token_service::TokenService;

/// 인증 흐름 오케스트레이터
///
/// 의존성은 생성자에서 명시적으로 주입됩니다.
pub struct AuthService {
    user_repo: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    password_service: Arc<PasswordService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            password_service,
        }
    }

    /// 이메일/비밀번호로 로그인합니다.
    ///
    /// 존재하지 않는 이메일, 비밀번호 없는 계정(OAuth 전용),
    /// 잘못된 비밀번호는 모두 동일한 `InvalidLogin` 에러를 반환하여
    /// 계정 존재 여부를 노출하지 않습니다.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::InvalidLogin("Invalid email or password".to_string()))?;

        let stored_hash = user
            .password
            .as_deref()
            .ok_or_else(|| AppError::InvalidLogin("Invalid email or password".to_string()))?;

        if !self.password_service.verify_password(password, stored_hash)? {
            return Err(AppError::InvalidLogin(
                "Invalid email or password".to_string(),
            ));
        }

        log::info!("로그인 성공: {}", user.email);

        self.issue_session(&user).await
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰을 세션으로 저장합니다.
    ///
    /// 기존 세션이 있으면 새 리프레시 토큰으로 덮어씁니다.
    /// (사용자당 세션 1개)
    pub async fn issue_session(&self, user: &User) -> Result<TokenPair, AppError> {
        let pair = self.token_service.generate_token_pair(user)?;

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let refresh_token = pair
            .refresh_token
            .as_deref()
            .ok_or_else(|| AppError::InternalError("리프레시 토큰 생성 실패".to_string()))?;

        self.user_repo
            .save_refresh_token(&user_id, refresh_token)
            .await?;

        Ok(pair)
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 서명/만료 검증과 DB 저장 토큰 일치 확인을 모두 통과해야 하며,
    /// 로그아웃된 세션의 토큰은 DB 매칭 단계에서 거부됩니다.
    /// 리프레시 토큰 회전은 하지 않습니다. 응답에는 새 액세스 토큰만
    /// 포함됩니다.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        self.token_service.verify_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| {
                AppError::InvalidRefreshToken("Invalid refresh token".to_string())
            })?;

        let access_token = self.token_service.generate_access_token(&user)?;

        Ok(TokenPair {
            access_token,
            refresh_token: None,
            expires_in: crate::config::JwtConfig::access_expiration_secs(),
        })
    }

    /// 세션을 무효화합니다. (멱등)
    ///
    /// 저장된 리프레시 토큰을 제거하므로 이후의 갱신 요청은 거부됩니다.
    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        self.user_repo.remove_refresh_token(user_id).await?;

        log::info!("로그아웃 완료: {}", user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory::InMemoryUserStore;

    async fn service_with_user(
        email: &str,
        password: &str,
    ) -> (AuthService, Arc<InMemoryUserStore>, Arc<PasswordService>) {
        let store = Arc::new(InMemoryUserStore::new());
        let password_service = Arc::new(PasswordService::with_params(8 * 1024, 2).unwrap());

        let hash = password_service.hash_password(password).unwrap();
        store
            .create(User::new_local(
                email.to_string(),
                "테스트 사용자".to_string(),
                hash,
            ))
            .await
            .unwrap();

        let service = AuthService::new(
            store.clone(),
            Arc::new(TokenService::new()),
            Arc::clone(&password_service),
        );

        (service, store, password_service)
    }

    #[actix_web::test]
    async fn test_unknown_email_and_wrong_password_give_same_error() {
        let (service, _store, _) = service_with_user("known@example.com", "CorrectHorse1").await;

        let unknown = service
            .login("unknown@example.com", "CorrectHorse1")
            .await
            .unwrap_err();
        let wrong = service
            .login("known@example.com", "WrongPassword1")
            .await
            .unwrap_err();

        assert!(matches!(unknown, AppError::InvalidLogin(_)));
        assert!(matches!(wrong, AppError::InvalidLogin(_)));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[actix_web::test]
    async fn test_refresh_returns_access_token_only() {
        let (service, _store, _) = service_with_user("user@example.com", "CorrectHorse1").await;

        let pair = service.login("user@example.com", "CorrectHorse1").await.unwrap();
        let refresh = pair.refresh_token.unwrap();

        let refreshed = service.refresh(&refresh).await.unwrap();

        assert!(refreshed.refresh_token.is_none());
        assert!(!refreshed.access_token.is_empty());
    }

    #[actix_web::test]
    async fn test_refresh_after_logout_is_rejected() {
        let (service, store, _) = service_with_user("user@example.com", "CorrectHorse1").await;

        let pair = service.login("user@example.com", "CorrectHorse1").await.unwrap();
        let refresh = pair.refresh_token.unwrap();

        // 로그아웃 전에는 정상 갱신
        assert!(service.refresh(&refresh).await.is_ok());

        let user = store
            .find_by_email("user@example.com")
            .await
            .unwrap()
            .unwrap();
        service.logout(&user.id_string().unwrap()).await.unwrap();

        // 서명은 여전히 유효하지만 저장된 세션이 없으므로 거부됩니다.
        let err = service.refresh(&refresh).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRefreshToken(_)));
    }

    #[actix_web::test]
    async fn test_login_with_oauth_only_account_is_invalid_login() {
        let store = Arc::new(InMemoryUserStore::new());
        store
            .create(User::new_google(
                "google@example.com".to_string(),
                "구글 사용자".to_string(),
                "google-id-123".to_string(),
            ))
            .await
            .unwrap();

        let service = AuthService::new(
            store,
            Arc::new(TokenService::new()),
            Arc::new(PasswordService::with_params(8 * 1024, 2).unwrap()),
        );

        let err = service
            .login("google@example.com", "AnyPassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidLogin(_)));
    }
}
