//! Chinese mainland mobile phone number validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::verdict::{ReasonCode, Rejection};

const PHONE_DIGITS: usize = 11;

/// Mainland mobile numbers: `1`, then `3`-`9`, then nine more digits.
static CHINA_MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("valid regex"));

/// Validates a mainland mobile number and returns it with every non-digit
/// character stripped.
///
/// Separators such as spaces or dashes are tolerated; a country code is
/// not, since it changes the digit count.
pub fn validate_china_phone_number(phone_number: &str) -> Result<String, Rejection> {
    if phone_number.is_empty() {
        return Err(Rejection::new(
            ReasonCode::Empty,
            "Phone number must not be empty",
        ));
    }

    let cleaned: String = phone_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if cleaned.len() != PHONE_DIGITS {
        return Err(Rejection::new(
            ReasonCode::WrongDigitCount,
            format!("Phone number must contain exactly {PHONE_DIGITS} digits"),
        ));
    }

    if !CHINA_MOBILE_RE.is_match(&cleaned) {
        return Err(Rejection::new(
            ReasonCode::InvalidPrefix,
            "Phone number format is invalid",
        ));
    }

    Ok(cleaned)
}
