//! Ownership validation for user-initiated mutations.

use crate::domain::error::Error;

/// Confirm that `acting_identity` matches `owner_identity`.
///
/// The comparison is a case-sensitive exact match; anything else fails with
/// [`crate::domain::ErrorCode::Forbidden`]. Pure and stateless. The
/// system-initiated counter writes performed by the toggle protocols do not
/// pass through this check.
pub fn validate_user_action(acting_identity: &str, owner_identity: &str) -> Result<(), Error> {
    if acting_identity == owner_identity {
        Ok(())
    } else {
        Err(Error::forbidden(format!(
            "{acting_identity} does not own the resource held by {owner_identity}"
        )))
    }
}
