//! Domain-level constants.
//!
//! These constants define business rules and user-facing channel names.

// =============================================================================
// Roles
// =============================================================================

/// Role granted to every registered account
pub const ROLE_USER: &str = "USER";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum username length requirement
pub const MIN_USERNAME_LENGTH: u64 = 1;

/// Maximum username length (matches the column width)
pub const MAX_USERNAME_LENGTH: u64 = 64;

// =============================================================================
// Notifications
// =============================================================================

/// Channel that renders transient "growl" style popups
pub const GROWL_CHANNEL: &str = "growlMessages";

/// Substituted for a missing welcome attribute
pub const MISSING_ATTRIBUTE: &str = "null";
