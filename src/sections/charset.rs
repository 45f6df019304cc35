//! Charset section - checks that only allowed characters are used.

use super::SectionResult;
use crate::policy::Policy;
use crate::verdict::{ReasonCode, Rejection};

/// Rejects candidates containing anything outside the policy's character
/// set.
pub fn charset_section(candidate: &str, policy: &Policy) -> SectionResult {
    if !policy.matches_charset(candidate) {
        return Err(Rejection::new(
            ReasonCode::InvalidCharacters,
            format!(
                "{} may only contain {}",
                policy.label(),
                policy.describe_charset()
            ),
        ));
    }
    Ok(())
}
