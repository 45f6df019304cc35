//! Length section - checks minimum and maximum length.

use super::SectionResult;
use crate::policy::Policy;
use crate::verdict::{ReasonCode, Rejection};

/// Checks the candidate length against the policy bounds, inclusive.
pub fn length_section(candidate: &str, policy: &Policy) -> SectionResult {
    let len = candidate.chars().count();

    if len < policy.min_length() {
        return Err(Rejection::new(
            ReasonCode::TooShort,
            format!(
                "{} must be at least {} characters",
                policy.label(),
                policy.min_length()
            ),
        ));
    }
    if len > policy.max_length() {
        return Err(Rejection::new(
            ReasonCode::TooLong,
            format!(
                "{} must be at most {} characters",
                policy.label(),
                policy.max_length()
            ),
        ));
    }
    Ok(())
}
