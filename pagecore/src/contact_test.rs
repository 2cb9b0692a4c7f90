use super::*;

use std::cell::RefCell;

use futures::executor::block_on;

struct FakeSubmitter {
    result: Result<(), SubmitError>,
    sent: RefCell<Vec<ContactMessage>>,
}

impl FakeSubmitter {
    fn answering(result: Result<(), SubmitError>) -> Self {
        Self { result, sent: RefCell::new(Vec::new()) }
    }
}

impl ContactSubmitter for FakeSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        self.sent.borrow_mut().push(message.clone());
        self.result.clone()
    }
}

fn filled(model: &mut ContactFormModel) {
    model.form.handle_change(NAME, "Ada Lovelace");
    model.form.handle_change(EMAIL, "ada@example.com");
    model.form.handle_change(SUBJECT, "Hello There");
    model.form.handle_change(MESSAGE, "I would like to talk about engines.");
}

fn send(model: &mut ContactFormModel, submitter: &FakeSubmitter) -> ContactStatus {
    block_on(send_contact(model, submitter))
}

// =============================================================
// Rules
// =============================================================

#[test]
fn short_message_and_blank_name_fail() {
    let mut form = contact_form();
    form.handle_change(NAME, "");
    form.handle_change(EMAIL, "a@b.com");
    form.handle_change(SUBJECT, "Hello There");
    form.handle_change(MESSAGE, "Short");

    assert!(!form.validate_form());
    assert_eq!(form.error(NAME), Some("Name is required"));
    assert_eq!(form.error(MESSAGE), Some("Message must be at least 10 characters"));
    assert!(form.error(EMAIL).is_none());
    assert!(form.error(SUBJECT).is_none());
}

#[test]
fn each_field_reports_its_minimum() {
    let form = contact_form();
    assert_eq!(form.validate_field(NAME, "A"), Some("Name must be at least 2 characters".to_owned()));
    assert_eq!(form.validate_field(SUBJECT, "Hey"), Some("Subject must be at least 5 characters".to_owned()));
    assert_eq!(form.validate_field(EMAIL, "nope"), Some("Please enter a valid email address".to_owned()));
    assert_eq!(form.validate_field(EMAIL, ""), Some("Email is required".to_owned()));
}

#[test]
fn padding_does_not_satisfy_minimums() {
    let mut model = ContactFormModel::new();
    model.form.handle_change(NAME, "a         ");
    model.form.handle_change(EMAIL, "ada@example.com");
    model.form.handle_change(SUBJECT, "Hi       ");
    model.form.handle_change(MESSAGE, "short     ");

    assert!(model.begin().is_none());
    assert_eq!(model.form.error(NAME), Some("Name must be at least 2 characters"));
    assert_eq!(model.form.error(SUBJECT), Some("Subject must be at least 5 characters"));
    assert_eq!(model.form.error(MESSAGE), Some("Message must be at least 10 characters"));
}

#[test]
fn first_invalid_field_follows_form_order() {
    let mut model = ContactFormModel::new();
    assert_eq!(model.first_invalid_field(), None);

    model.form.handle_change(NAME, "Ada Lovelace");
    model.form.handle_change(EMAIL, "ada@example.com");
    assert!(model.begin().is_none());
    assert_eq!(model.first_invalid_field(), Some(SUBJECT));

    filled(&mut model);
    assert!(model.form.validate_form());
    assert_eq!(model.first_invalid_field(), None);
}

#[test]
fn overlong_name_is_rejected() {
    let form = contact_form();
    let long = "x".repeat(51);
    assert_eq!(form.validate_field(NAME, &long), Some("Name must be no more than 50 characters".to_owned()));
}

#[test]
fn message_from_values_trims() {
    let values = values_from([(NAME, "  Ada "), (EMAIL, "a@b.com"), (SUBJECT, "Hi there"), (MESSAGE, " long enough text ")]);
    let message = ContactMessage::from_values(&values);
    assert_eq!(message.name, "Ada");
    assert_eq!(message.message, "long enough text");
}

// =============================================================
// Send flow
// =============================================================

#[test]
fn successful_send_clears_form_and_shows_success() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    let submitter = FakeSubmitter::answering(Ok(()));

    assert_eq!(send(&mut model, &submitter), ContactStatus::Success);
    assert_eq!(submitter.sent.borrow().len(), 1);
    assert_eq!(model.form.values(), &empty_values());
    assert!(model.form.state().touched.is_empty());
    assert!(model.form.state().errors.is_empty());
    assert!(!model.form.is_submitting());
}

#[test]
fn invalid_form_never_reaches_submitter() {
    let mut model = ContactFormModel::new();
    let submitter = FakeSubmitter::answering(Ok(()));
    assert_eq!(send(&mut model, &submitter), ContactStatus::Idle);
    assert!(submitter.sent.borrow().is_empty());
    assert_eq!(model.form.state().errors.len(), 4);
}

#[test]
fn failed_send_keeps_values_and_shows_error() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    let submitter = FakeSubmitter::answering(Err(SubmitError::Rejected));

    assert_eq!(send(&mut model, &submitter), ContactStatus::Error);
    assert_eq!(model.form.value(NAME), "Ada Lovelace");
    assert!(!model.form.is_submitting());
}

#[test]
fn error_banner_persists_until_retry() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    send(&mut model, &FakeSubmitter::answering(Err(SubmitError::Network("offline".to_owned()))));
    assert_eq!(model.status(), ContactStatus::Error);
    model.dismiss_success(model.success_seq());
    assert_eq!(model.status(), ContactStatus::Error);

    assert_eq!(send(&mut model, &FakeSubmitter::answering(Ok(()))), ContactStatus::Success);
}

#[test]
fn begin_while_sending_returns_none() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    assert!(model.begin().is_some());
    assert!(model.begin().is_none());
    assert_eq!(model.form.submit_count(), 1);
}

// =============================================================
// Success banner timeout
// =============================================================

#[test]
fn dismiss_success_hides_matching_banner() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    send(&mut model, &FakeSubmitter::answering(Ok(())));
    let seq = model.success_seq();
    model.dismiss_success(seq);
    assert_eq!(model.status(), ContactStatus::Idle);
}

#[test]
fn stale_dismiss_keeps_newer_banner() {
    let mut model = ContactFormModel::new();
    filled(&mut model);
    send(&mut model, &FakeSubmitter::answering(Ok(())));
    let first = model.success_seq();

    filled(&mut model);
    send(&mut model, &FakeSubmitter::answering(Ok(())));
    model.dismiss_success(first);
    assert_eq!(model.status(), ContactStatus::Success);
}
