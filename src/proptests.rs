//! Property tests for the classifier and the phone validator.

use proptest::prelude::*;

use crate::evaluator::evaluate;
use crate::phone::validate_china_phone_number;
use crate::policy::Policy;
use crate::verdict::ReasonCode;

fn policies() -> impl Strategy<Value = &'static Policy> {
    prop_oneof![Just(Policy::account()), Just(Policy::password())]
}

proptest! {
    /// Allowed characters but too few of them: length is the first rule broken.
    #[test]
    fn short_account_is_too_short(candidate in "[a-zA-Z0-9]{1,5}") {
        let rejection = evaluate(&candidate, Policy::account()).unwrap_err();
        prop_assert_eq!(rejection.reason, ReasonCode::TooShort);
    }

    #[test]
    fn long_account_is_too_long(candidate in "[a-zA-Z0-9]{16,40}") {
        let rejection = evaluate(&candidate, Policy::account()).unwrap_err();
        prop_assert_eq!(rejection.reason, ReasonCode::TooLong);
    }

    #[test]
    fn short_password_is_too_short(candidate in "[a-zA-Z0-9._$-]{1,7}") {
        let rejection = evaluate(&candidate, Policy::password()).unwrap_err();
        prop_assert_eq!(rejection.reason, ReasonCode::TooShort);
    }

    #[test]
    fn long_password_is_too_long(candidate in "[a-zA-Z0-9._$-]{21,40}") {
        let rejection = evaluate(&candidate, Policy::password()).unwrap_err();
        prop_assert_eq!(rejection.reason, ReasonCode::TooLong);
    }

    /// A single disallowed character is reported regardless of anything else.
    #[test]
    fn disallowed_character_always_reported(
        policy in policies(),
        head in "[a-z0-9]{0,25}",
        bad in "[!@#%^&*()+=~,;:?/|]",
        tail in "[a-z0-9]{0,25}",
    ) {
        let candidate = format!("{head}{bad}{tail}");
        let rejection = evaluate(&candidate, policy).unwrap_err();
        prop_assert_eq!(rejection.reason, ReasonCode::InvalidCharacters);
    }

    /// Re-validating an accepted value accepts it again, unchanged.
    #[test]
    fn evaluate_is_idempotent(policy in policies(), candidate in "[a-zA-Z0-9._$-]{0,24}") {
        if let Ok(normalized) = evaluate(&candidate, policy) {
            prop_assert_eq!(evaluate(&normalized, policy), Ok(normalized.clone()));
            prop_assert_eq!(normalized, candidate);
        }
    }

    /// Accepted phone numbers are always eleven ASCII digits starting `1[3-9]`.
    #[test]
    fn accepted_phone_numbers_are_clean(raw in "[0-9 +()-]{0,20}") {
        if let Ok(cleaned) = validate_china_phone_number(&raw) {
            prop_assert_eq!(cleaned.len(), 11);
            prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(cleaned.starts_with('1'));
            prop_assert!(matches!(cleaned.as_bytes()[1], b'3'..=b'9'));
        }
    }

    #[test]
    fn separators_do_not_change_the_verdict(
        digits in "1[3-9][0-9]{9}",
        sep in "[ -]",
    ) {
        let spaced = format!("{}{sep}{}{sep}{}", &digits[..3], &digits[3..7], &digits[7..]);
        prop_assert_eq!(validate_china_phone_number(&spaced), Ok(digits));
    }
}
