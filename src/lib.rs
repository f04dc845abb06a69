//! buydot-client - Headless client for the Buydot storefront REST backend.
//!
//! Implements the storefront's client-side workflows without any UI
//! rendering: form validation, single-flight submission, queued
//! notifications, and path routing. Pages and widgets are the embedding
//! application's concern.
//!
//! # Layers
//!
//! - **config**: injected backend endpoint and application constants
//! - **domain**: form state, pure validation rules, catalog entities
//! - **infra**: the reqwest adapter behind the [`BackendApi`] seam
//! - **services**: submission controllers, notification queue, navigation
//! - **routing**: pure path-to-page table
//! - **errors**: centralized error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use buydot_client::{
//!     Config, HttpBackend, RegistrationController, RegistrationForm, SnackbarQueue,
//! };
//! # use buydot_client::{Navigator, Page};
//! # struct NoopNavigator;
//! # impl Navigator for NoopNavigator { fn navigate(&self, _page: Page) {} }
//!
//! # async fn run() {
//! let backend = Arc::new(HttpBackend::new(Config::from_env()));
//! let notifier = Arc::new(SnackbarQueue::with_defaults());
//! let controller = RegistrationController::new(backend, notifier, Arc::new(NoopNavigator));
//!
//! let form = RegistrationForm::new("crio-user", "learnbydoing", "learnbydoing");
//! controller.submit(&form).await;
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod routing;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    CheckoutForm, Credentials, LoginForm, Product, RegistrationForm, ValidationOutcome,
};
pub use errors::{ApiError, ApiResult};
pub use infra::{AuthSession, BackendApi, HttpBackend};
pub use routing::{resolve, Page};
pub use services::{
    CheckoutController, LoginController, Navigator, Notification, Notifier, Position,
    RegistrationController, Severity, SnackbarQueue,
};
