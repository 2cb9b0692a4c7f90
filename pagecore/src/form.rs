//! Declarative field validation and the form submit state machine.
//!
//! Each field carries an ordered list of [`Rule`]s; the first one that fails
//! supplies the field's message. [`Form`] tracks values, errors, touched
//! flags and the busy flag, and knows nothing about which fields it holds.
//!
//! DESIGN
//! ======
//! `errors` only ever holds failing fields: a passing validation removes the
//! key instead of storing an empty message. Live validation on change is gated
//! on the field having been touched (blurred) once.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::consts::EMAIL_PATTERN;

/// Field name → current value.
pub type FieldValues = BTreeMap<String, String>;

type Predicate = Arc<dyn Fn(&str, &FieldValues) -> bool + Send + Sync>;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// One validation check and the message shown when it fails.
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish_non_exhaustive()
    }
}

impl Rule {
    pub fn new(
        predicate: impl Fn(&str, &FieldValues) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self { predicate: Arc::new(predicate), message: message.into() }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn check(&self, value: &str, all: &FieldValues) -> bool {
        (self.predicate)(value, all)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// RULE FACTORIES
// =============================================================================
//
// Everything except `required` and `custom` passes on an empty value, so
// optional fields only get checked once the user types something.

/// Non-blank after trimming.
#[must_use]
pub fn required() -> Rule {
    Rule::new(|value, _| !value.trim().is_empty(), "This field is required")
}

#[must_use]
pub fn email() -> Rule {
    Rule::new(
        |value, _| value.is_empty() || EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(value)),
        "Please enter a valid email address",
    )
}

#[must_use]
pub fn min_length(min: usize) -> Rule {
    Rule::new(
        move |value, _| value.is_empty() || value.chars().count() >= min,
        format!("Must be at least {min} characters"),
    )
}

/// Like [`min_length`], but surrounding whitespace does not count.
#[must_use]
pub fn min_trimmed_length(min: usize) -> Rule {
    Rule::new(
        move |value, _| {
            let trimmed = value.trim();
            trimmed.is_empty() || trimmed.chars().count() >= min
        },
        format!("Must be at least {min} characters"),
    )
}

#[must_use]
pub fn max_length(max: usize) -> Rule {
    Rule::new(
        move |value, _| value.is_empty() || value.chars().count() <= max,
        format!("Must be no more than {max} characters"),
    )
}

#[must_use]
pub fn pattern(re: Regex) -> Rule {
    Rule::new(move |value, _| value.is_empty() || re.is_match(value), "Invalid format")
}

/// Must equal another field's current value (password confirmation and the like).
#[must_use]
pub fn matches_field(other: &str) -> Rule {
    let other = other.to_owned();
    Rule::new(
        move |value, all| value.is_empty() || all.get(&other).is_some_and(|o| o == value),
        "Fields do not match",
    )
}

#[must_use]
pub fn custom(predicate: impl Fn(&str, &FieldValues) -> bool + Send + Sync + 'static) -> Rule {
    Rule::new(predicate, "Validation failed")
}

/// Ordered field → rule list table.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl FieldRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field's rules.
    #[must_use]
    pub fn field(mut self, name: &str, rules: Vec<Rule>) -> Self {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = rules;
        } else {
            self.fields.push((name.to_owned(), rules));
        }
        self
    }

    #[must_use]
    pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, r)| r.as_slice())
    }

    /// Names of fields that carry rules, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FieldValues,
    /// Only failing fields appear here.
    pub errors: BTreeMap<String, String>,
    pub touched: BTreeMap<String, bool>,
    pub is_submitting: bool,
    pub submit_count: u32,
}

/// Error and touched state for rendering one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub error: Option<String>,
    pub touched: bool,
    /// Touched and failing: the only case where an error is shown.
    pub invalid: bool,
}

/// Result of trying to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the form is now busy. Call [`Form::finish_submit`]
    /// once the send settles.
    Ready(FieldValues),
    /// Validation failed; errors are populated and every field is touched.
    Invalid,
    /// A submission is already in flight; nothing changed.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid,
    Busy,
}

#[derive(Debug, Clone)]
pub struct Form {
    rules: FieldRules,
    initial: FieldValues,
    state: FormState,
}

impl Form {
    #[must_use]
    pub fn new(initial: FieldValues, rules: FieldRules) -> Self {
        let state = FormState { values: initial.clone(), ..FormState::default() };
        Self { rules, initial, state }
    }

    // --- Validation ---

    /// First failing rule's message for `value`, or `None` when valid.
    #[must_use]
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        let rules = self.rules.rules_for(name)?;
        rules
            .iter()
            .find(|rule| !rule.check(value, &self.state.values))
            .map(|rule| rule.message().to_owned())
    }

    /// Validate every rule-bearing field and rebuild the error map.
    pub fn validate_form(&mut self) -> bool {
        let errors = self
            .rules
            .names()
            .filter_map(|name| {
                let value = self.value(name);
                self.validate_field(name, value).map(|msg| (name.to_owned(), msg))
            })
            .collect::<BTreeMap<_, _>>();
        let valid = errors.is_empty();
        self.state.errors = errors;
        valid
    }

    fn revalidate(&mut self, name: &str) {
        let value = self.value(name).to_owned();
        match self.validate_field(name, &value) {
            Some(msg) => {
                self.state.errors.insert(name.to_owned(), msg);
            }
            None => {
                self.state.errors.remove(name);
            }
        }
    }

    // --- Input events ---

    /// Store the new value; re-validate only fields already touched.
    pub fn handle_change(&mut self, name: &str, value: &str) {
        self.state.values.insert(name.to_owned(), value.to_owned());
        if self.is_touched(name) {
            self.revalidate(name);
        }
    }

    /// Mark touched and validate immediately.
    pub fn handle_blur(&mut self, name: &str) {
        self.state.touched.insert(name.to_owned(), true);
        self.revalidate(name);
    }

    pub fn set_field_value(&mut self, name: &str, value: &str) {
        self.handle_change(name, value);
    }

    /// Override a field's error. `None` clears it.
    pub fn set_field_error(&mut self, name: &str, error: Option<String>) {
        match error {
            Some(msg) => {
                self.state.errors.insert(name.to_owned(), msg);
            }
            None => {
                self.state.errors.remove(name);
            }
        }
    }

    pub fn set_field_touched(&mut self, name: &str, touched: bool) {
        self.state.touched.insert(name.to_owned(), touched);
    }

    // --- Submission ---

    /// Touch every field, validate, and claim the busy flag when valid.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.state.is_submitting {
            return SubmitAttempt::Busy;
        }
        let names = self.rules.names().map(str::to_owned).collect::<Vec<_>>();
        for name in names {
            self.state.touched.insert(name, true);
        }
        let valid = self.validate_form();
        self.state.submit_count += 1;
        if !valid {
            return SubmitAttempt::Invalid;
        }
        self.state.is_submitting = true;
        SubmitAttempt::Ready(self.state.values.clone())
    }

    /// Release the busy flag claimed by [`Form::begin_submit`].
    pub fn finish_submit(&mut self) {
        self.state.is_submitting = false;
    }

    /// Validate, then run `on_submit` with the values while busy.
    ///
    /// The busy flag is released on every exit: success, error, panic, or the
    /// returned future being dropped mid-flight.
    ///
    /// # Errors
    ///
    /// Propagates the callback's error after the busy flag is released.
    pub async fn handle_submit<F, Fut, E>(&mut self, on_submit: F) -> Result<SubmitOutcome, E>
    where
        F: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let values = match self.begin_submit() {
            SubmitAttempt::Ready(values) => values,
            SubmitAttempt::Invalid => return Ok(SubmitOutcome::Invalid),
            SubmitAttempt::Busy => return Ok(SubmitOutcome::Busy),
        };
        let _busy = BusyGuard { state: &mut self.state };
        on_submit(values).await?;
        Ok(SubmitOutcome::Submitted)
    }

    /// Restore values (initial by default) and clear all other state.
    pub fn reset_form(&mut self, values: Option<FieldValues>) {
        self.state = FormState {
            values: values.unwrap_or_else(|| self.initial.clone()),
            ..FormState::default()
        };
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.state.values.get(name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_touched(&self, name: &str) -> bool {
        self.state.touched.get(name).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    #[must_use]
    pub fn submit_count(&self) -> u32 {
        self.state.submit_count
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state.errors.is_empty()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.values != self.initial
    }

    #[must_use]
    pub fn field_meta(&self, name: &str) -> FieldMeta {
        let error = self.error(name).map(str::to_owned);
        let touched = self.is_touched(name);
        FieldMeta { invalid: touched && error.is_some(), error, touched }
    }
}

struct BusyGuard<'a> {
    state: &'a mut FormState,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.is_submitting = false;
    }
}

/// Build a [`FieldValues`] map from pairs.
#[must_use]
pub fn values_from<const N: usize>(pairs: [(&str, &str); N]) -> FieldValues {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}
