//! 문의 양식과 뉴스레터 구독 입력 검증. 실제 전송은 하지 않고 로그만 남긴다.

use log::info;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 문의 본문 최소 길이 [문자]
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Empty,
    InvalidEmail,
    TooShort { min: usize },
}

/// 항목 하나의 검증 실패.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Empty => write!(f, "{}: 필수 입력입니다", self.field),
            FieldErrorKind::InvalidEmail => write!(f, "{}: 이메일 형식이 아닙니다", self.field),
            FieldErrorKind::TooShort { min } => {
                write!(f, "{}: 최소 {min}자 이상 입력하세요", self.field)
            }
        }
    }
}

/// 양식 전체의 검증 실패 목록. 첫 오류에서 멈추지 않고 모두 모은다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    fn push(&mut self, field: Field, kind: FieldErrorKind) {
        self.0.push(FieldError { field, kind });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("입력 검증 실패: {0}")]
    Validation(ValidationErrors),
    #[error("전송 실패: {0}")]
    Delivery(String),
}

impl From<ValidationErrors> for ContactError {
    fn from(value: ValidationErrors) -> Self {
        ContactError::Validation(value)
    }
}

/// 문의 양식.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// 선택 입력
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.push(Field::Name, FieldErrorKind::Empty);
        }
        check_email(&self.email, &mut errors);
        let message = self.message.trim();
        if message.is_empty() {
            errors.push(Field::Message, FieldErrorKind::Empty);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(
                Field::Message,
                FieldErrorKind::TooShort {
                    min: MIN_MESSAGE_CHARS,
                },
            );
        }
        errors.into_result()
    }
}

/// 뉴스레터 구독 양식.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&self.email, &mut errors);
        errors.into_result()
    }
}

fn check_email(email: &str, errors: &mut ValidationErrors) {
    let email = email.trim();
    if email.is_empty() {
        errors.push(Field::Email, FieldErrorKind::Empty);
    } else if !is_valid_email(email) {
        errors.push(Field::Email, FieldErrorKind::InvalidEmail);
    }
}

/// `local@domain.tld` 형태인지만 본다. 공백 불가, `@`는 정확히 하나.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

/// 메일/CRM 전송 경계.
pub trait Mailer {
    fn send_contact(&mut self, form: &ContactForm) -> Result<(), ContactError>;
    fn subscribe(&mut self, signup: &NewsletterSignup) -> Result<(), ContactError>;
}

/// 전송하지 않고 로그만 남기는 기본 구현.
#[derive(Debug, Default)]
pub struct LogMailer {
    pub sent: usize,
}

impl Mailer for LogMailer {
    fn send_contact(&mut self, form: &ContactForm) -> Result<(), ContactError> {
        info!(
            "contact form (not transmitted): from={} <{}> subject={:?} chars={}",
            form.name.trim(),
            form.email.trim(),
            form.subject.trim(),
            form.message.trim().chars().count()
        );
        self.sent += 1;
        Ok(())
    }

    fn subscribe(&mut self, signup: &NewsletterSignup) -> Result<(), ContactError> {
        info!("newsletter signup (not transmitted): {}", signup.email.trim());
        self.sent += 1;
        Ok(())
    }
}

/// 검증 후 전송한다.
pub fn submit_contact<M: Mailer>(mailer: &mut M, form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    mailer.send_contact(form)
}

pub fn submit_newsletter<M: Mailer>(
    mailer: &mut M,
    signup: &NewsletterSignup,
) -> Result<(), ContactError> {
    signup.validate()?;
    mailer.subscribe(signup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn message_length_counts_chars_not_bytes() {
        let form = ContactForm {
            name: "김".into(),
            email: "kim@example.kr".into(),
            subject: String::new(),
            message: "열 글자 이상 문의입니다".into(),
        };
        assert!(form.validate().is_ok());
    }
}
