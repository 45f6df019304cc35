//! Presence section - rejects empty candidates.

use super::SectionResult;
use crate::policy::Policy;
use crate::verdict::{ReasonCode, Rejection};

/// Rejects an empty candidate, or a whitespace-only one when the policy
/// treats blanks as empty.
pub fn presence_section(candidate: &str, policy: &Policy) -> SectionResult {
    let empty = if policy.blank_is_empty() {
        candidate.trim().is_empty()
    } else {
        candidate.is_empty()
    };

    if empty {
        return Err(Rejection::new(
            ReasonCode::Empty,
            format!("{} must not be empty", policy.label()),
        ));
    }
    Ok(())
}
