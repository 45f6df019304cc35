//! Input validation for registration forms
//!
//! This library validates account names, passwords, Chinese mainland
//! mobile phone numbers and security-question ("assistance") fields, and
//! provides two small helpers for Beijing-time timestamps and random
//! display identifiers.
//!
//! Account names and passwords go through one string strength classifier
//! driven by an immutable [`Policy`]: rules run in a fixed order and the
//! first failure is reported with a [`ReasonCode`] and a message.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use input_strength::{ReasonCode, validate_account, validate_password};
//! use secrecy::SecretString;
//!
//! assert_eq!(validate_account("shuye2024"), Ok("shuye2024".to_string()));
//!
//! let password = SecretString::new("abcd1234".to_string().into());
//! let rejection = validate_password(&password).unwrap_err();
//! assert_eq!(rejection.reason, ReasonCode::SequentialAlpha);
//! println!("{}", rejection);
//! ```

// Internal modules
mod assistance;
mod evaluator;
mod instance_id;
mod phone;
mod policy;
mod sections;
mod timestamp;
mod verdict;

#[cfg(test)]
mod proptests;

// Public API
pub use assistance::{
    AssistanceError, AssistanceField, AssistanceInfo, AssistanceViolation, MAX_FIELD_LENGTH,
    validate_assistance_info,
};
pub use evaluator::{evaluate, validate_account, validate_password};
pub use instance_id::InstanceId;
pub use phone::validate_china_phone_number;
pub use policy::{Policy, PolicyBuilder, PolicyError, SequenceRule};
pub use timestamp::{
    TimestampError, current_beijing_time, current_timestamp_millis, format_beijing_time,
};
pub use verdict::{ReasonCode, Rejection, ValidationResult};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, validate_account_tx, validate_password_tx};
