//! SMTP 메일 발송 서비스
//!
//! 비밀번호 재설정 메일을 SMTP 릴레이를 통해 발송합니다.
//! 인증 정보는 환경 변수로 설정합니다. ([`SmtpConfig`](crate::config::SmtpConfig))

use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::errors::errors::AppError;

/// 메일 발송 인터페이스
///
/// 서비스 계층이 SMTP 구현에 직접 의존하지 않도록 분리하며,
/// 테스트에서는 목 구현으로 대체합니다.
pub trait MailSender: Send + Sync {
    /// 비밀번호 재설정 메일을 발송합니다.
    fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), AppError>;
}

/// SMTP 기반 메일 발송기
pub struct Mailer {
    transport: SmtpTransport,
    from: String,
}

impl Mailer {
    /// 환경 변수 설정으로 SMTP 전송기를 구성합니다.
    pub fn new() -> Result<Self, AppError> {
        let transport = SmtpTransport::relay(&SmtpConfig::host())
            .map_err(|e| AppError::InternalError(format!("SMTP 전송기 생성 실패: {}", e)))?
            .credentials(Credentials::new(
                SmtpConfig::username(),
                SmtpConfig::password(),
            ))
            .build();

        Ok(Self {
            transport,
            from: SmtpConfig::from_address(),
        })
    }
}

impl MailSender for Mailer {
    fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), AppError> {
        let body = format!(
            "비밀번호 재설정을 요청하셨습니다.\n\
             \n\
             아래 링크에서 새 비밀번호를 설정해주세요. 링크는 1시간 동안 유효합니다.\n\
             \n\
             {}\n\
             \n\
             본인이 요청하지 않았다면 이 메일을 무시하셔도 됩니다.",
            reset_link
        );

        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::InternalError(format!("발신 주소 오류: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::ValidationError(format!("수신 주소 오류: {}", e)))?)
            .subject("비밀번호 재설정 안내")
            .header(lettre::message::header::ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AppError::InternalError(format!("메일 구성 실패: {}", e)))?;

        self.transport
            .send(&email)
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

        log::info!("비밀번호 재설정 메일 발송: {}", to);

        Ok(())
    }
}
