//! Registration submission workflow.
//!
//! Orchestrates validate -> loading -> backend call -> notify/navigate.
//! Failures never escape this controller; they terminate in a notification
//! and the caller keeps the form state for retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{MSG_REGISTERED, STATUS_REGISTERED};
use crate::domain::{validate_registration, RegistrationForm, ValidationOutcome};
use crate::errors::ApiError;
use crate::infra::BackendApi;
use crate::routing::Page;
use crate::services::navigator::Navigator;
use crate::services::notifier::{Notifier, Position, Severity};

/// Controller for the registration form.
pub struct RegistrationController {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    loading: AtomicBool,
}

impl RegistrationController {
    pub fn new(
        backend: Arc<dyn BackendApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            backend,
            notifier,
            navigator,
            loading: AtomicBool::new(false),
        }
    }

    /// Whether a submission is in flight. The UI disables the submit
    /// trigger and shows a progress indicator while this is true.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Submit the registration form.
    ///
    /// Single-flight: a call while a submission is pending returns
    /// immediately. Only username and password reach the network; the
    /// confirmation field stays local.
    pub async fn submit(&self, form: &RegistrationForm) {
        if self.is_loading() {
            return;
        }

        if let ValidationOutcome::Fail(message) = validate_registration(form) {
            self.notifier
                .enqueue(&message, Severity::Warning, Position::TOP_CENTER);
            return;
        }

        self.loading.store(true, Ordering::SeqCst);
        let result = self.backend.register(&form.credentials()).await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(status) if status == STATUS_REGISTERED => {
                tracing::info!(username = %form.username, "registration succeeded");
                self.notifier
                    .enqueue(MSG_REGISTERED, Severity::Success, Position::TOP_CENTER);
                self.navigator.navigate(Page::Login);
            }
            Ok(status) => {
                self.notifier.enqueue(
                    &ApiError::UnexpectedStatus(status).user_message(),
                    Severity::Error,
                    Position::TOP_CENTER,
                );
            }
            Err(err) => {
                self.notifier
                    .enqueue(&err.user_message(), Severity::Error, Position::TOP_CENTER);
            }
        }
    }
}
