//! Form state holders.
//!
//! Each form instance owns its field state exclusively; nothing here is
//! shared across forms. A form is only ever turned into a wire payload after
//! validation has passed.

use serde::Serialize;

/// Credentials payload sent to the backend.
///
/// This is the only shape that crosses the network for auth operations;
/// `confirm_password` stays local to the registration form.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Wire payload; drops the local-only confirmation field.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Checkout form state
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub address: String,
}

impl CheckoutForm {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_never_carry_the_confirmation_field() {
        let form = RegistrationForm::new("crio-user", "learnbydoing", "learnbydoing");
        let json = serde_json::to_value(form.credentials()).unwrap();

        assert_eq!(json["username"], "crio-user");
        assert_eq!(json["password"], "learnbydoing");
        assert!(json.get("confirm_password").is_none());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
