//! Pure form validation.
//!
//! Rules are evaluated in a fixed priority order and short-circuit at the
//! first violation, so at most one message is ever produced per attempt.
//! Validators take the form explicitly and read no other state.

use crate::config::{
    MIN_ADDRESS_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, MSG_ADDRESS_REQUIRED,
    MSG_ADDRESS_TOO_SHORT, MSG_PASSWORDS_MISMATCH, MSG_PASSWORD_REQUIRED, MSG_PASSWORD_TOO_SHORT,
    MSG_USERNAME_REQUIRED, MSG_USERNAME_TOO_SHORT,
};
use crate::domain::forms::{CheckoutForm, LoginForm, RegistrationForm};

/// Outcome of validating a form: pass, or the first violated rule's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass,
    Fail(String),
}

impl ValidationOutcome {
    fn fail(message: &str) -> Self {
        ValidationOutcome::Fail(message.to_string())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass)
    }
}

/// Validate a registration form.
///
/// Priority order: username presence, username length, password presence,
/// password length, password confirmation. The confirmation rule applies to
/// any mismatch once the length rules pass (the original UI skipped it for
/// exactly-6-character passwords; that hole is closed here).
pub fn validate_registration(form: &RegistrationForm) -> ValidationOutcome {
    if form.username.is_empty() {
        return ValidationOutcome::fail(MSG_USERNAME_REQUIRED);
    }
    if form.username.chars().count() < MIN_USERNAME_LENGTH {
        return ValidationOutcome::fail(MSG_USERNAME_TOO_SHORT);
    }
    if form.password.is_empty() {
        return ValidationOutcome::fail(MSG_PASSWORD_REQUIRED);
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationOutcome::fail(MSG_PASSWORD_TOO_SHORT);
    }
    if form.password != form.confirm_password {
        return ValidationOutcome::fail(MSG_PASSWORDS_MISMATCH);
    }
    ValidationOutcome::Pass
}

/// Validate a login form. Login only requires both fields to be present.
pub fn validate_login(form: &LoginForm) -> ValidationOutcome {
    if form.username.is_empty() {
        return ValidationOutcome::fail(MSG_USERNAME_REQUIRED);
    }
    if form.password.is_empty() {
        return ValidationOutcome::fail(MSG_PASSWORD_REQUIRED);
    }
    ValidationOutcome::Pass
}

/// Validate a checkout form.
pub fn validate_checkout(form: &CheckoutForm) -> ValidationOutcome {
    if form.address.is_empty() {
        return ValidationOutcome::fail(MSG_ADDRESS_REQUIRED);
    }
    if form.address.chars().count() < MIN_ADDRESS_LENGTH {
        return ValidationOutcome::fail(MSG_ADDRESS_TOO_SHORT);
    }
    ValidationOutcome::Pass
}
