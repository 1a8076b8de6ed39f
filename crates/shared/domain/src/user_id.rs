//! Opaque user identifier generation.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::constants::USER_ID_LENGTH;

/// Generate a fresh random identifier: `USER_ID_LENGTH` characters drawn
/// from `[a-zA-Z0-9]`.
pub fn generate_user_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(USER_ID_LENGTH)
        .map(char::from)
        .collect()
}
