//! Checkout submission workflow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{MSG_ORDER_PLACED, STATUS_OK};
use crate::domain::{validate_checkout, CheckoutForm, ValidationOutcome};
use crate::errors::ApiError;
use crate::infra::BackendApi;
use crate::routing::Page;
use crate::services::navigator::Navigator;
use crate::services::notifier::{Notifier, Position, Severity};

/// Controller for the checkout form.
pub struct CheckoutController {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    loading: AtomicBool,
}

impl CheckoutController {
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

    /// Place the order. Single-flight, never propagates errors.
    pub async fn submit(&self, form: &CheckoutForm) {
        if self.is_loading() {
            return;
        }

        if let ValidationOutcome::Fail(message) = validate_checkout(form) {
            self.notifier
                .enqueue(&message, Severity::Warning, Position::TOP_CENTER);
            return;
        }

        self.loading.store(true, Ordering::SeqCst);
        let result = self.backend.checkout(&form.address).await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(status) if status == STATUS_OK => {
                tracing::info!("order placed");
                self.notifier
                    .enqueue(MSG_ORDER_PLACED, Severity::Success, Position::TOP_CENTER);
                self.navigator.navigate(Page::Thanks);
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
