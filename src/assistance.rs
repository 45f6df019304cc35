//! Assistance field validation
//!
//! The security question, its prompt and its answer are optional as a
//! group: either all three are filled in or none is. Unlike the string
//! classifier, every violation is collected and reported at once so a form
//! can show them together.

use std::fmt;
use thiserror::Error;

use crate::verdict::ReasonCode;

/// Maximum length of each assistance field, in characters.
pub const MAX_FIELD_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistanceField {
    Question,
    Prompt,
    Answer,
}

impl fmt::Display for AssistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssistanceField::Question => "Assistance question",
            AssistanceField::Prompt => "Assistance prompt",
            AssistanceField::Answer => "Assistance answer",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistanceViolation {
    #[error("Question, prompt and answer must be either all empty or all filled in")]
    MixedEmpty,
    #[error("{field} is too long: maximum {max}, current {actual}")]
    FieldTooLong {
        field: AssistanceField,
        max: usize,
        actual: usize,
    },
}

impl AssistanceViolation {
    pub fn reason(&self) -> ReasonCode {
        match self {
            AssistanceViolation::MixedEmpty => ReasonCode::MixedEmpty,
            AssistanceViolation::FieldTooLong { .. } => ReasonCode::FieldTooLong,
        }
    }
}

/// Every violation found, in check order. Displays one violation per line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.violations))]
pub struct AssistanceError {
    pub violations: Vec<AssistanceViolation>,
}

impl AssistanceError {
    pub fn reasons(&self) -> Vec<ReasonCode> {
        self.violations.iter().map(AssistanceViolation::reason).collect()
    }
}

fn render(violations: &[AssistanceViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validated assistance fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistanceInfo {
    pub question: String,
    pub prompt: String,
    pub answer: String,
}

impl AssistanceInfo {
    /// True when the user skipped the assistance fields.
    pub fn is_empty(&self) -> bool {
        self.question.is_empty()
    }
}

impl From<AssistanceInfo> for [String; 3] {
    fn from(info: AssistanceInfo) -> Self {
        [info.question, info.prompt, info.answer]
    }
}

/// Validates the three assistance fields together.
///
/// # Errors
///
/// Returns every violation found if:
/// - some fields are empty and others are not
/// - any field is longer than [`MAX_FIELD_LENGTH`] characters
pub fn validate_assistance_info(
    question: &str,
    prompt: &str,
    answer: &str,
) -> Result<AssistanceInfo, AssistanceError> {
    let mut violations = Vec::new();

    let fields = [
        (AssistanceField::Question, question),
        (AssistanceField::Prompt, prompt),
        (AssistanceField::Answer, answer),
    ];

    let empty = fields.iter().filter(|(_, value)| value.is_empty()).count();
    if empty != 0 && empty != fields.len() {
        violations.push(AssistanceViolation::MixedEmpty);
    }

    for (field, value) in fields {
        let actual = value.chars().count();
        if actual > MAX_FIELD_LENGTH {
            violations.push(AssistanceViolation::FieldTooLong {
                field,
                max: MAX_FIELD_LENGTH,
                actual,
            });
        }
    }

    if !violations.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Assistance info rejected with {} violation(s)", violations.len());
        return Err(AssistanceError { violations });
    }

    Ok(AssistanceInfo {
        question: question.to_string(),
        prompt: prompt.to_string(),
        answer: answer.to_string(),
    })
}
