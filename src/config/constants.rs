//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Backend
// =============================================================================

/// Default backend endpoint (overridable via configuration)
pub const DEFAULT_ENDPOINT: &str = "https://buydot.onrender.com/api/v1";

/// Status the registration endpoint returns on success
pub const STATUS_REGISTERED: u16 = 201;

/// Status the login and checkout endpoints return on success
pub const STATUS_OK: u16 = 200;

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length requirement
pub const MIN_USERNAME_LENGTH: usize = 6;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum delivery address length requirement
pub const MIN_ADDRESS_LENGTH: usize = 20;

pub const MSG_USERNAME_REQUIRED: &str = "Username is a required field";
pub const MSG_USERNAME_TOO_SHORT: &str = "Username must be at least 6 characters";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is a required field";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const MSG_ADDRESS_REQUIRED: &str = "Address is a required field";
pub const MSG_ADDRESS_TOO_SHORT: &str = "Address must be at least 20 characters";

// =============================================================================
// User-facing workflow messages
// =============================================================================

pub const MSG_REGISTERED: &str = "Registered successfully";
pub const MSG_LOGGED_IN: &str = "Logged in successfully";
pub const MSG_ORDER_PLACED: &str = "Order placed successfully";

/// Shown for any failure that is not a structured 4xx rejection
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Check that the backend is running, reachable and returns valid JSON.";

// =============================================================================
// Notification surface
// =============================================================================

/// Maximum number of concurrently visible notifications
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss timeout for a visible notification, in milliseconds
pub const NOTIFICATION_TIMEOUT_MS: u64 = 5_000;
