//! Client configuration module
//!
//! Handles the injected backend endpoint and application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
