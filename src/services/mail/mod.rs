//! 메일 발송 모듈

pub mod mailer;

pub use mailer::{MailSender, Mailer};
