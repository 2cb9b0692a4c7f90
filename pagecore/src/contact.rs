//! The portfolio contact form: four required fields and a replaceable sender.
//!
//! [`ContactFormModel`] wraps a [`Form`] with the banner state shown above it.
//! The host drives a send in two steps so the model never has to be borrowed
//! across an await: [`ContactFormModel::begin`] validates and claims the busy
//! flag, [`ContactFormModel::settle`] records how the send went.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::consts::{
    MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_SUBJECT_LENGTH, MIN_MESSAGE_LENGTH, MIN_NAME_LENGTH, MIN_SUBJECT_LENGTH,
};
use crate::error::SubmitError;
use crate::form::{FieldRules, FieldValues, Form, SubmitAttempt, email, max_length, min_trimmed_length, required, values_from};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const SUBJECT: &str = "subject";
pub const MESSAGE: &str = "message";

#[must_use]
pub fn contact_rules() -> FieldRules {
    FieldRules::new()
        .field(
            NAME,
            vec![
                required().with_message("Name is required"),
                min_trimmed_length(MIN_NAME_LENGTH).with_message("Name must be at least 2 characters"),
                max_length(MAX_NAME_LENGTH).with_message("Name must be no more than 50 characters"),
            ],
        )
        .field(
            EMAIL,
            vec![required().with_message("Email is required"), email()],
        )
        .field(
            SUBJECT,
            vec![
                required().with_message("Subject is required"),
                min_trimmed_length(MIN_SUBJECT_LENGTH).with_message("Subject must be at least 5 characters"),
                max_length(MAX_SUBJECT_LENGTH).with_message("Subject must be no more than 100 characters"),
            ],
        )
        .field(
            MESSAGE,
            vec![
                required().with_message("Message is required"),
                min_trimmed_length(MIN_MESSAGE_LENGTH).with_message("Message must be at least 10 characters"),
                max_length(MAX_MESSAGE_LENGTH).with_message("Message must be no more than 500 characters"),
            ],
        )
}

#[must_use]
pub fn empty_values() -> FieldValues {
    values_from([(NAME, ""), (EMAIL, ""), (SUBJECT, ""), (MESSAGE, "")])
}

#[must_use]
pub fn contact_form() -> Form {
    Form::new(empty_values(), contact_rules())
}

/// The four validated strings handed to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn from_values(values: &FieldValues) -> Self {
        let get = |key: &str| values.get(key).map(|v| v.trim().to_owned()).unwrap_or_default();
        Self { name: get(NAME), email: get(EMAIL), subject: get(SUBJECT), message: get(MESSAGE) }
    }
}

/// Outbound contract for the contact form. Resolve on success, reject on
/// failure; the form needs no detail beyond that.
#[allow(async_fn_in_trait)]
pub trait ContactSubmitter {
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the message was not delivered.
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Banner shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    /// Sent. Hidden again after the banner timeout.
    Success,
    /// Failed. Stays until the next attempt.
    Error,
}

#[derive(Debug, Clone)]
pub struct ContactFormModel {
    pub form: Form,
    status: ContactStatus,
    success_seq: u64,
}

impl Default for ContactFormModel {
    fn default() -> Self {
        Self { form: contact_form(), status: ContactStatus::Idle, success_seq: 0 }
    }
}

impl ContactFormModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the previous banner and try to start a send.
    ///
    /// Returns the message when the form is valid and not already sending.
    pub fn begin(&mut self) -> Option<ContactMessage> {
        if self.form.is_submitting() {
            return None;
        }
        self.status = ContactStatus::Idle;
        match self.form.begin_submit() {
            SubmitAttempt::Ready(values) => Some(ContactMessage::from_values(&values)),
            SubmitAttempt::Invalid | SubmitAttempt::Busy => None,
        }
    }

    /// Release the busy flag and record the send result. A success clears the
    /// form.
    pub fn settle(&mut self, result: Result<(), SubmitError>) -> ContactStatus {
        self.form.finish_submit();
        match result {
            Ok(()) => {
                self.form.reset_form(None);
                self.success_seq += 1;
                self.status = ContactStatus::Success;
            }
            Err(e) => {
                log::debug!("contact submission failed: {e}");
                self.status = ContactStatus::Error;
            }
        }
        self.status
    }

    /// Hide the success banner raised by send number `seq`. A newer success
    /// keeps its banner.
    pub fn dismiss_success(&mut self, seq: u64) {
        if self.status == ContactStatus::Success && self.success_seq == seq {
            self.status = ContactStatus::Idle;
        }
    }

    /// First field, in form order, currently showing an error.
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        [NAME, EMAIL, SUBJECT, MESSAGE].into_iter().find(|name| self.form.error(name).is_some())
    }

    #[must_use]
    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Sequence number of the most recent successful send.
    #[must_use]
    pub fn success_seq(&self) -> u64 {
        self.success_seq
    }
}

/// Validate, send, and settle in one go. Leaves the form untouched when it is
/// invalid or already sending.
pub async fn send_contact<S: ContactSubmitter>(model: &mut ContactFormModel, submitter: &S) -> ContactStatus {
    let Some(message) = model.begin() else {
        return model.status();
    };
    let result = submitter.submit(&message).await;
    model.settle(result)
}
