//! 문의/뉴스레터 검증 테스트.
use pretty_assertions::assert_eq;
use workstation_toolbox::contact::{
    submit_contact, submit_newsletter, ContactError, ContactForm, Field, FieldError,
    FieldErrorKind, LogMailer, Mailer, NewsletterSignup, ValidationErrors, MIN_MESSAGE_CHARS,
};

/// 전송 단계에서 항상 실패하는 메일러. 호출 횟수를 센다.
#[derive(Default)]
struct OfflineMailer {
    attempts: usize,
}

impl Mailer for OfflineMailer {
    fn send_contact(&mut self, _form: &ContactForm) -> Result<(), ContactError> {
        self.attempts += 1;
        Err(ContactError::Delivery("smtp unreachable".into()))
    }

    fn subscribe(&mut self, _signup: &NewsletterSignup) -> Result<(), ContactError> {
        self.attempts += 1;
        Err(ContactError::Delivery("list service unreachable".into()))
    }
}

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Jordan".into(),
        email: "jordan@example.com".into(),
        subject: String::new(),
        message: "Do you ship to Norway?".into(),
    }
}

#[test]
fn valid_form_is_logged_not_sent() {
    let mut mailer = LogMailer::default();
    submit_contact(&mut mailer, &valid_form()).expect("valid form");
    assert_eq!(mailer.sent, 1);
}

#[test]
fn empty_form_reports_every_field() {
    let err = ContactForm::default().validate().unwrap_err();
    assert_eq!(
        err,
        ValidationErrors(vec![
            FieldError { field: Field::Name, kind: FieldErrorKind::Empty },
            FieldError { field: Field::Email, kind: FieldErrorKind::Empty },
            FieldError { field: Field::Message, kind: FieldErrorKind::Empty },
        ])
    );
}

#[test]
fn short_message_and_bad_email() {
    let form = ContactForm {
        email: "jordan.example.com".into(),
        message: "hi there".into(),
        ..valid_form()
    };
    let err = form.validate().unwrap_err();
    assert_eq!(
        err.for_field(Field::Email).map(|e| e.kind),
        Some(FieldErrorKind::InvalidEmail)
    );
    assert_eq!(
        err.for_field(Field::Message).map(|e| e.kind),
        Some(FieldErrorKind::TooShort { min: MIN_MESSAGE_CHARS })
    );
    assert!(err.for_field(Field::Name).is_none());
}

#[test]
fn whitespace_only_name_is_empty() {
    let form = ContactForm {
        name: "   ".into(),
        ..valid_form()
    };
    assert!(form.validate().unwrap_err().for_field(Field::Name).is_some());
}

#[test]
fn invalid_newsletter_is_not_delivered() {
    let mut mailer = LogMailer::default();
    let err = submit_newsletter(
        &mut mailer,
        &NewsletterSignup {
            email: "not-an-email".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContactError::Validation(_)));
    assert_eq!(mailer.sent, 0);

    submit_newsletter(
        &mut mailer,
        &NewsletterSignup {
            email: " reader@example.org ".into(),
        },
    )
    .expect("trimmed email is valid");
    assert_eq!(mailer.sent, 1);
}

#[test]
fn delivery_failure_is_passed_through() {
    let mut mailer = OfflineMailer::default();
    match submit_contact(&mut mailer, &valid_form()) {
        Err(ContactError::Delivery(msg)) => assert_eq!(msg, "smtp unreachable"),
        other => panic!("expected delivery error, got {other:?}"),
    }
    assert_eq!(mailer.attempts, 1);

    let err = submit_newsletter(
        &mut mailer,
        &NewsletterSignup {
            email: "reader@example.org".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContactError::Delivery(_)));
    assert_eq!(mailer.attempts, 2);
}

#[test]
fn invalid_form_never_reaches_the_mailer() {
    let mut mailer = OfflineMailer::default();
    let err = submit_contact(&mut mailer, &ContactForm::default()).unwrap_err();
    assert!(matches!(err, ContactError::Validation(_)));
    assert_eq!(mailer.attempts, 0);
}
