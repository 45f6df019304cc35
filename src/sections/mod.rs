//! Classifier sections
//!
//! Each section checks one rule of a policy. The evaluator runs them in
//! order and stops at the first rejection.

mod charset;
mod length;
mod pattern;
mod presence;

pub use charset::charset_section;
pub use length::length_section;
pub use pattern::{repeat_section, sequence_section};
pub use presence::presence_section;

use crate::verdict::Rejection;

/// Result type for section functions.
/// - `Ok(())` - Section passed
/// - `Err(rejection)` - Candidate rejected by this section
pub type SectionResult = Result<(), Rejection>;
