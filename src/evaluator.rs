//! String strength classifier - runs a policy's sections in order.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::Policy;
use crate::sections::{
    SectionResult, charset_section, length_section, presence_section, repeat_section,
    sequence_section,
};
use crate::verdict::{Rejection, ValidationResult};

/// Delay before a `_tx` validation runs, so a form can cancel it on the
/// next keystroke.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

type Section = fn(&str, &Policy) -> SectionResult;

/// Evaluates `candidate` against `policy`.
///
/// Sections run in a fixed order and the first failure wins, so the
/// reported reason is always the earliest rule broken.
///
/// # Returns
/// `Ok(normalized)` when every section passes, otherwise the rejection of
/// the first failing section.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn evaluate(candidate: &str, policy: &Policy) -> ValidationResult {
    let sections: [(&str, Section); 5] = [
        ("presence", presence_section),
        ("charset", charset_section),
        ("length", length_section),
        ("repeat", repeat_section),
        ("sequence", sequence_section),
    ];

    for (section_name, section_fn) in sections {
        if let Err(rejection) = section_fn(candidate, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "{} rejected by {} section: {}",
                policy.label(),
                section_name,
                rejection.reason
            );
            return Err(rejection);
        }
    }

    Ok(candidate.to_string())
}

/// Validates an account name with [`Policy::account`].
pub fn validate_account(account: &str) -> ValidationResult {
    let result = evaluate(account, Policy::account());

    #[cfg(feature = "tracing")]
    if let Err(ref rejection) = result {
        tracing::warn!("Account rejected ({}): {:?}", rejection.reason, account);
    }

    result
}

/// Validates a password with [`Policy::password`].
///
/// The password never appears in the rejection message or in logs.
pub fn validate_password(password: &SecretString) -> Result<SecretString, Rejection> {
    match evaluate(password.expose_secret(), Policy::password()) {
        Ok(accepted) => Ok(SecretString::new(accepted.into())),
        Err(rejection) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password rejected ({})", rejection.reason);
            Err(rejection)
        }
    }
}

/// Waits out [`DEBOUNCE`], returning `false` if `token` fired first.
#[cfg(feature = "async")]
async fn debounce(token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("validation cancelled before debounce elapsed");
            false
        }
        _ = tokio::time::sleep(DEBOUNCE) => true,
    }
}

/// Async account validation that sends the result via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn validate_account_tx(
    account: &str,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    if !debounce(&token).await {
        return;
    }

    if let Err(e) = tx.send(validate_account(account)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send account validation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

/// Async password validation that sends the result via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, Rejection>>,
) {
    if !debounce(&token).await {
        return;
    }

    if tx.send(validate_password(password)).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::ReasonCode;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn password_reason(s: &str) -> Option<ReasonCode> {
        validate_password(&secret(s)).err().map(|r| r.reason)
    }

    fn account_reason(s: &str) -> Option<ReasonCode> {
        validate_account(s).err().map(|r| r.reason)
    }

    #[test]
    fn test_password_accepted() {
        let accepted = validate_password(&secret("Passw0rd$")).expect("should accept");
        assert_eq!(accepted.expose_secret(), "Passw0rd$");
    }

    #[test]
    fn test_password_invalid_character_wins_over_length() {
        assert_eq!(password_reason("Passw0rd!"), Some(ReasonCode::InvalidCharacters));
        assert_eq!(password_reason("ab!"), Some(ReasonCode::InvalidCharacters));
    }

    #[test]
    fn test_password_rule_order() {
        assert_eq!(password_reason(""), Some(ReasonCode::Empty));
        assert_eq!(password_reason("   "), Some(ReasonCode::InvalidCharacters));
        assert_eq!(password_reason("Ab1$x"), Some(ReasonCode::TooShort));
        assert_eq!(
            password_reason("a1b2c3d4e5f6g7h8i9j0k"),
            Some(ReasonCode::TooLong)
        );
        assert_eq!(password_reason("aaaa1234"), Some(ReasonCode::ConsecutiveRepeat));
        assert_eq!(password_reason("abcd1234"), Some(ReasonCode::SequentialAlpha));
        assert_eq!(password_reason("x6789yzQ"), Some(ReasonCode::SequentialDigits));
    }

    #[test]
    fn test_password_descending_digits_accepted() {
        assert_eq!(password_reason("4321abXY"), None);
    }

    #[test]
    fn test_password_message_hides_secret() {
        let rejection = validate_password(&secret("hunter2hunter!")).unwrap_err();
        assert!(!rejection.message.contains("hunter"));
    }

    #[test]
    fn test_account_accepted_returns_account() {
        assert_eq!(validate_account("abc123"), Ok("abc123".to_string()));
        assert_eq!(validate_account("Shuye2024x"), Ok("Shuye2024x".to_string()));
    }

    #[test]
    fn test_account_rule_order() {
        assert_eq!(account_reason(""), Some(ReasonCode::Empty));
        assert_eq!(account_reason(" \t "), Some(ReasonCode::Empty));
        assert_eq!(account_reason(" abc123"), Some(ReasonCode::InvalidCharacters));
        assert_eq!(account_reason("ab12"), Some(ReasonCode::TooShort));
        assert_eq!(account_reason("a1b2c3d4e5f6g7h8"), Some(ReasonCode::TooLong));
        assert_eq!(account_reason("aaaa1234"), Some(ReasonCode::ConsecutiveRepeat));
        assert_eq!(account_reason("xy1234"), Some(ReasonCode::SequentialDigits));
    }

    #[test]
    fn test_account_letter_runs_count_as_digits() {
        assert_eq!(account_reason("abcd1234"), Some(ReasonCode::SequentialDigits));
        assert_eq!(account_reason("q9abcdq"), Some(ReasonCode::SequentialDigits));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let first = evaluate("Passw0rd$", Policy::password()).expect("should accept");
        let second = evaluate(&first, Policy::password()).expect("should accept");
        assert_eq!(first, second);
    }
}
