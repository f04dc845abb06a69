//! Infrastructure layer - outbound HTTP.

pub mod backend;

pub use backend::{AuthSession, BackendApi, HttpBackend};

#[cfg(test)]
pub use backend::MockBackendApi;
