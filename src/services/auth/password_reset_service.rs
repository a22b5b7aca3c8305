//! 비밀번호 재설정 서비스
//!
//! 이메일 기반 비밀번호 재설정 흐름을 담당합니다.
//!
//! 재설정 토큰은 256비트 CSPRNG 난수를 hex로 인코딩한 값이며,
//! 발급 후 1시간 뒤 만료됩니다. 토큰은 일회용으로, 사용 즉시
//! 제거됩니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mongodb::bson::DateTime;
use rand::{rngs::OsRng, RngCore};

use crate::config::{PasswordResetConfig, ServerConfig};
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::password_service::PasswordService;
use crate::services::mail::MailSender;

/// 재설정 토큰 바이트 길이 (256비트)
const RESET_TOKEN_BYTES: usize = 32;

/// 비밀번호 재설정 매니저
pub struct PasswordResetService {
    user_repo: Arc<dyn UserStore>,
    password_service: Arc<PasswordService>,
    mailer: Arc<dyn MailSender>,
}

impl PasswordResetService {
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        password_service: Arc<PasswordService>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            mailer,
        }
    }

    /// 암호학적으로 안전한 재설정 토큰을 생성합니다.
    ///
    /// 32바이트 난수를 hex 인코딩하여 64자 문자열을 반환합니다.
    pub fn generate_reset_token() -> String {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// 비밀번호 재설정을 요청합니다.
    ///
    /// 등록되지 않은 이메일이어도 성공으로 처리하여 계정 존재 여부를
    /// 노출하지 않습니다. 등록된 이메일이면 재설정 토큰을 저장한 뒤
    /// 재설정 링크가 담긴 메일을 발송합니다.
    ///
    /// 토큰 저장 후 메일 발송이 실패하면 에러를 반환하지만, 저장된
    /// 토큰은 만료 시까지 유효하게 남습니다. 이후의 재요청이 토큰을
    /// 덮어씁니다.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // 미등록 이메일도 동일한 성공 응답을 받습니다.
                log::debug!("미등록 이메일로 재설정 요청: {}", email);
                return Ok(());
            }
        };

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let token = Self::generate_reset_token();
        let expires_at = Utc::now()
            + Duration::minutes(PasswordResetConfig::token_ttl_minutes());

        self.user_repo
            .set_password_reset_token(
                &user_id,
                &token,
                DateTime::from_millis(expires_at.timestamp_millis()),
            )
            .await?;

        let reset_link = format!(
            "{}/reset-password?token={}",
            ServerConfig::frontend_url(),
            token
        );

        self.mailer.send_password_reset(&user.email, &reset_link)?;

        Ok(())
    }

    /// 재설정 토큰으로 비밀번호를 변경합니다.
    ///
    /// 토큰 일치와 만료 검사는 단일 쿼리로 수행되며, 잘못된 토큰,
    /// 만료된 토큰, 이미 사용된 토큰은 모두 `InvalidResetToken`으로
    /// 거부됩니다. 새 비밀번호 저장과 토큰 제거는 단일 쓰기로
    /// 수행됩니다.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_password_reset_token(token)
            .await?
            .ok_or_else(|| {
                AppError::InvalidResetToken("Invalid or expired token".to_string())
            })?;

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let password_hash = self.password_service.hash_password(new_password)?;

        self.user_repo
            .reset_password_and_clear_token(&user_id, &password_hash)
            .await?;

        log::info!("비밀번호 재설정 완료: {}", user.email);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::entities::users::user::User;
    use crate::repositories::users::memory::InMemoryUserStore;

    /// 발송 내역을 기록하는 목 메일러
    struct MockMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl MockMailer {
        fn new(fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl MailSender for MockMailer {
        fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::ExternalServiceError("SMTP down".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), reset_link.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_reset_token_is_256_bits_hex() {
        let token = PasswordResetService::generate_reset_token();

        assert_eq!(token.len(), RESET_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_reset_tokens_are_unique() {
        let first = PasswordResetService::generate_reset_token();
        let second = PasswordResetService::generate_reset_token();

        assert_ne!(first, second);
    }

    #[test]
    fn test_mock_mailer_records_reset_link() {
        let mailer = MockMailer::new(false);
        mailer
            .send_password_reset("user@example.com", "http://localhost:3000/reset-password?token=abc")
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("reset-password"));
    }

    #[test]
    fn test_mailer_failure_propagates() {
        let mailer = MockMailer::new(true);
        let result = mailer.send_password_reset("user@example.com", "link");

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    async fn service_with_user(
        email: &str,
        fail_mail: bool,
    ) -> (PasswordResetService, Arc<InMemoryUserStore>, Arc<MockMailer>) {
        let store = Arc::new(InMemoryUserStore::new());
        let mailer = Arc::new(MockMailer::new(fail_mail));

        store
            .create(User::new_local(
                email.to_string(),
                "테스트 사용자".to_string(),
                "$argon2id$previous-hash".to_string(),
            ))
            .await
            .unwrap();

        let service = PasswordResetService::new(
            store.clone(),
            Arc::new(PasswordService::with_params(8 * 1024, 2).unwrap()),
            mailer.clone(),
        );

        (service, store, mailer)
    }

    /// 메일로 발송된 재설정 링크에서 토큰을 추출합니다.
    fn token_from_link(mailer: &MockMailer) -> String {
        let sent = mailer.sent.lock().unwrap();
        sent[0].1.split("token=").nth(1).unwrap().to_string()
    }

    #[actix_web::test]
    async fn test_reset_token_is_single_use() {
        let (service, store, mailer) = service_with_user("reset@example.com", false).await;

        service
            .request_password_reset("reset@example.com")
            .await
            .unwrap();
        let token = token_from_link(&mailer);

        service.reset_password(&token, "NewPassword1").await.unwrap();

        // 새 비밀번호 해시가 기록되고 토큰은 제거됩니다.
        let user = store
            .find_by_email("reset@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(user.reset_password_token.is_none());

        // 같은 토큰의 재사용은 거부됩니다.
        let err = service
            .reset_password(&token, "AnotherPassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResetToken(_)));
    }

    #[actix_web::test]
    async fn test_unknown_email_succeeds_without_sending() {
        let (service, _store, mailer) = service_with_user("known@example.com", false).await;

        service
            .request_password_reset("unknown@example.com")
            .await
            .unwrap();

        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_mail_failure_leaves_token_valid() {
        let (service, store, _mailer) = service_with_user("reset@example.com", true).await;

        let err = service
            .request_password_reset("reset@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));

        // 발송 실패 후에도 저장된 토큰은 만료 시까지 유효하게 남습니다.
        let user = store
            .find_by_email("reset@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(user.reset_password_token.is_some());
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let (service, _store, _mailer) = service_with_user("reset@example.com", false).await;

        let err = service
            .reset_password("not-a-real-token", "NewPassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResetToken(_)));
    }
}
