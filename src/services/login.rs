//! Login submission workflow.
//!
//! Structurally the registration workflow with a different validator,
//! endpoint, and landing page. The authenticated session is handed back to
//! the caller; persisting the token is not this crate's concern.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::MSG_LOGGED_IN;
use crate::domain::{validate_login, LoginForm, ValidationOutcome};
use crate::infra::{AuthSession, BackendApi};
use crate::routing::Page;
use crate::services::navigator::Navigator;
use crate::services::notifier::{Notifier, Position, Severity};

/// Controller for the login form.
pub struct LoginController {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    loading: AtomicBool,
}

impl LoginController {
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

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Submit the login form. Single-flight, never propagates errors.
    ///
    /// Returns the session on success so the embedding application can
    /// store the token; `None` on validation or submission failure.
    pub async fn submit(&self, form: &LoginForm) -> Option<AuthSession> {
        if self.is_loading() {
            return None;
        }

        if let ValidationOutcome::Fail(message) = validate_login(form) {
            self.notifier
                .enqueue(&message, Severity::Warning, Position::TOP_CENTER);
            return None;
        }

        self.loading.store(true, Ordering::SeqCst);
        let result = self.backend.login(&form.credentials()).await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(session) => {
                tracing::info!(username = %session.username, "login succeeded");
                self.notifier
                    .enqueue(MSG_LOGGED_IN, Severity::Success, Position::TOP_CENTER);
                self.navigator.navigate(Page::Products);
                Some(session)
            }
            Err(err) => {
                self.notifier
                    .enqueue(&err.user_message(), Severity::Error, Position::TOP_CENTER);
                None
            }
        }
    }
}
