//! Application services layer - submission workflows and user-facing surfaces.
//!
//! Controllers depend on trait seams (`BackendApi`, `Notifier`, `Navigator`)
//! for dependency inversion; concrete collaborators are injected at
//! construction.

mod checkout;
mod login;
mod navigator;
mod notifier;
mod registration;

pub use checkout::CheckoutController;
pub use login::LoginController;
pub use navigator::Navigator;
pub use notifier::{
    Horizontal, Notification, Notifier, Position, Severity, SnackbarQueue, Vertical,
};
pub use registration::RegistrationController;

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use notifier::MockNotifier;
