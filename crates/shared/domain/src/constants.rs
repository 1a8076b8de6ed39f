//! Domain-level constants.
//!
//! Canonical error messages and identifier rules. The messages travel the
//! wire inside the status envelope, so both services must agree on them.

// =============================================================================
// Error messages
// =============================================================================

/// Message for a lookup that matched no user
pub const ERR_USER_NOT_FOUND: &str = "user not found";

/// Message for a credential mismatch
pub const ERR_WRONG_PASSWORD: &str = "wrong password";

/// Message for an update request that supplies nothing to write
pub const ERR_NO_FIELDS_FOR_UPDATE: &str = "no fields for update";

/// Generic message for unclassified failures; detail stays in the log
pub const ERR_UNEXPECTED: &str = "unexpected error";

/// Build the missing-fields message, e.g. "name, password are required".
pub fn required_fields(fields: &[&str]) -> String {
    if fields.len() > 1 {
        format!("{} are required", fields.join(", "))
    } else {
        format!("{} is required", fields[0])
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Length of generated user identifiers
pub const USER_ID_LENGTH: usize = 12;
