//! Phone Number Value Object
//!
//! Customers register and sign in with an Iranian mobile number. The same
//! number reaches us in many shapes (`0912 123 4567`, `+98 912-123-4567`,
//! `989121234567`, Persian digits from a mobile keyboard), so every
//! comparison and uniqueness check happens on the canonical form
//! `+989XXXXXXXXX`.
//!
//! ## Canonicalization
//! 1. Persian / Arabic-Indic digits are transliterated to ASCII
//! 2. Everything except ASCII digits and a leading `+` is dropped
//! 3. The country prefix is reconstructed:
//!    - `+98…` is kept as is
//!    - `98` + 10 digits gets a `+`
//!    - a single leading `0` becomes `+98`
//!    - a bare 10-digit number starting with `9` gets `+98`
//!
//! Anything else is returned stripped but otherwise untouched; [`validate`]
//! decides whether it is usable.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use platform::locale::transliterate_digits;
use serde::Serialize;
use std::str::FromStr;

/// Country calling code prefix in canonical form
pub const COUNTRY_PREFIX: &str = "+98";

/// Canonical mobile numbers: `+98`, then `9`, then 9 digits
const CANONICAL_MOBILE_LENGTH: usize = 13;

/// Keep ASCII digits and a `+` that appears before any digit
fn strip(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());

    for c in transliterate_digits(raw).chars() {
        if c.is_ascii_digit() || (c == '+' && stripped.is_empty()) {
            stripped.push(c);
        }
    }

    stripped
}

/// Canonicalize a phone number
///
/// Total and idempotent: never fails, but the result only identifies a
/// customer if [`validate`] accepts it.
pub fn normalize(raw: &str) -> String {
    let stripped = strip(raw);

    if stripped.starts_with(COUNTRY_PREFIX) {
        return stripped;
    }

    if stripped.starts_with("98") && stripped.len() == 12 {
        return format!("+{}", stripped);
    }

    // `00…` is an international dialing prefix, not a trunk zero
    if stripped.starts_with('0') && !stripped.starts_with("00") {
        return format!("{}{}", COUNTRY_PREFIX, &stripped[1..]);
    }

    if stripped.len() == 10 && stripped.starts_with('9') {
        return format!("{}{}", COUNTRY_PREFIX, stripped);
    }

    stripped
}

fn is_canonical_mobile(normalized: &str) -> bool {
    normalized.len() == CANONICAL_MOBILE_LENGTH
        && normalized.starts_with("+989")
        && normalized[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Whether the input normalizes to a valid Iranian mobile number
pub fn validate(raw: &str) -> bool {
    is_canonical_mobile(&normalize(raw))
}

/// Validated mobile number in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize and validate
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(AppError::bad_request("Phone number cannot be empty"));
        }

        let normalized = normalize(raw);
        if !is_canonical_mobile(&normalized) {
            return Err(AppError::bad_request("Invalid mobile number")
                .with_action("Enter an Iranian mobile number, e.g. 0912 123 4567"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }

    /// Form safe to write into logs, e.g. `+98912***4567`
    pub fn masked(&self) -> String {
        let len = self.0.len();
        if len < 10 || !self.0.is_ascii() {
            return "***".to_string();
        }
        format!("{}***{}", &self.0[..6], &self.0[len - 4..])
    }
}

impl FromStr for PhoneNumber {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PhoneNumber::new(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_national_form() {
        assert_eq!(normalize("09121234567"), "+989121234567");
    }

    #[test]
    fn test_normalize_already_canonical() {
        assert_eq!(normalize("+989121234567"), "+989121234567");
    }

    #[test]
    fn test_normalize_formatted_input() {
        assert_eq!(normalize("(0912) 123-4567"), "+989121234567");
        assert_eq!(normalize("+98 912 123 4567"), "+989121234567");
        assert_eq!(normalize(" 0912.123.4567 "), "+989121234567");
    }

    #[test]
    fn test_normalize_persian_digits() {
        assert_eq!(normalize("۰۹۱۲۳۴۵۶۷۸۹"), "+989123456789");
        assert_eq!(normalize("٠٩١٢٣٤٥٦٧٨٩"), "+989123456789");
        assert_eq!(normalize("۰۹۱۲ 123 ۴۵۶۷"), "+989121234567");
    }

    #[test]
    fn test_normalize_country_code_without_plus() {
        assert_eq!(normalize("989121234567"), "+989121234567");
        // Wrong length: not treated as a country code
        assert_eq!(normalize("98912123456"), "98912123456");
    }

    #[test]
    fn test_normalize_bare_subscriber_number() {
        assert_eq!(normalize("9121234567"), "+989121234567");
    }

    #[test]
    fn test_normalize_unrecognized_passthrough() {
        assert_eq!(normalize("12345"), "12345");
        assert_eq!(normalize("+1 (555) 010-9999"), "+15550109999");
        assert_eq!(normalize("00989121234567"), "00989121234567");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_plus_only_before_digits() {
        assert_eq!(normalize("0912+1234567"), "+989121234567");
        assert_eq!(normalize("++989121234567"), "+989121234567");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "09121234567",
            "+989121234567",
            "(0912) 123-4567",
            "۰۹۱۲۳۴۵۶۷۸۹",
            "989121234567",
            "9121234567",
            "12345",
            "0",
            "+",
            "00989121234567",
            "+1 (555) 010-9999",
            "+982112345678",
            "",
        ];

        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate("09121234567"));
        assert!(validate("+989121234567"));
        assert!(validate("۰۹۱۲۳۴۵۶۷۸۹"));
        assert!(validate("0912 123 4567"));
    }

    #[test]
    fn test_validate_rejects() {
        // Landline (Tehran) prefix
        assert!(!validate("+982112345678"));
        assert!(!validate("02112345678"));
        assert!(!validate("12345"));
        assert!(!validate("0912123456"));
        assert!(!validate("091212345678"));
        assert!(!validate(""));
    }

    #[test]
    fn test_phone_number_new() {
        let phone = PhoneNumber::new("(0912) 123-4567").unwrap();
        assert_eq!(phone.as_str(), "+989121234567");
        assert_eq!(phone.to_string(), "+989121234567");
    }

    #[test]
    fn test_phone_number_invalid() {
        let err = PhoneNumber::new("+982112345678").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.action().is_some());

        assert_eq!(PhoneNumber::new("   ").unwrap_err().status_code(), 400);
    }

    #[test]
    fn test_phone_number_equality_across_forms() {
        let a: PhoneNumber = "09121234567".parse().unwrap();
        let b: PhoneNumber = "+98 912 123 4567".parse().unwrap();
        let c: PhoneNumber = "۰۹۱۲۱۲۳۴۵۶۷".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_phone_number_masked() {
        let phone = PhoneNumber::new("09121234567").unwrap();
        assert_eq!(phone.masked(), "+98912***4567");
    }

    #[test]
    fn test_phone_number_serializes_as_string() {
        let phone = PhoneNumber::new("09121234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+989121234567\"");
    }
}
