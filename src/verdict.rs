//! Validation outcome types shared by every validator.

use std::fmt;
use thiserror::Error;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    Empty,
    InvalidCharacters,
    TooShort,
    TooLong,
    ConsecutiveRepeat,
    SequentialDigits,
    SequentialAlpha,
    WrongDigitCount,
    InvalidPrefix,
    MixedEmpty,
    FieldTooLong,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::Empty => "EMPTY",
            ReasonCode::InvalidCharacters => "INVALID_CHARACTERS",
            ReasonCode::TooShort => "TOO_SHORT",
            ReasonCode::TooLong => "TOO_LONG",
            ReasonCode::ConsecutiveRepeat => "CONSECUTIVE_REPEAT",
            ReasonCode::SequentialDigits => "SEQUENTIAL_DIGITS",
            ReasonCode::SequentialAlpha => "SEQUENTIAL_ALPHA",
            ReasonCode::WrongDigitCount => "WRONG_DIGIT_COUNT",
            ReasonCode::InvalidPrefix => "INVALID_PREFIX",
            ReasonCode::MixedEmpty => "MIXED_EMPTY",
            ReasonCode::FieldTooLong => "FIELD_TOO_LONG",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected candidate: the rule that failed and a message for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Rejection {
    pub reason: ReasonCode,
    pub message: String,
}

impl Rejection {
    pub fn new(reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// `Ok` carries the normalized value.
pub type ValidationResult = Result<String, Rejection>;
