//! Argument validation
//!
//! Required path parameters are checked before any network call is made, so
//! a bad argument never costs a round-trip.

use crate::errors::{Result, SDKError};

/// Fail fast when a required argument is missing or blank.
pub fn require_non_empty(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SDKError::InvalidArgument(format!("{field} cannot be empty")));
    }
    Ok(())
}
