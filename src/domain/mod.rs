//! Domain layer - form state, validation rules, and catalog entities.
//!
//! Everything here is pure: no I/O, no ambient state. The submission
//! controllers in `services` orchestrate these types against the
//! infrastructure layer.

pub mod forms;
pub mod product;
pub mod validation;

pub use forms::{CheckoutForm, Credentials, LoginForm, RegistrationForm};
pub use product::Product;
pub use validation::{
    validate_checkout, validate_login, validate_registration, ValidationOutcome,
};
