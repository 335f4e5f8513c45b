//! Locale Digit Transliteration
//!
//! Customers type on Persian keyboards, so numeric input (phone numbers,
//! OTP codes) can arrive with Persian (U+06F0..U+06F9) or Arabic-Indic
//! (U+0660..U+0669) digits. Anything digit-based must run through
//! [`transliterate_digits`] before parsing.

/// Persian digits, indexed by value
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Arabic-Indic digits, indexed by value
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Map a Persian or Arabic-Indic digit to its ASCII equivalent
///
/// Returns `None` for every other character, including ASCII digits.
#[inline]
pub fn to_ascii_digit(c: char) -> Option<char> {
    PERSIAN_DIGITS
        .iter()
        .position(|&d| d == c)
        .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|&d| d == c))
        .map(|value| ASCII_DIGITS[value])
}

/// Replace every Persian / Arabic-Indic digit with ASCII, leaving other
/// characters untouched
pub fn transliterate_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| to_ascii_digit(c).unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_digits() {
        assert_eq!(transliterate_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(transliterate_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_mixed_input_keeps_other_characters() {
        assert_eq!(transliterate_digits("(۰۹۱۲) 12٣-4567"), "(0912) 123-4567");
        assert_eq!(transliterate_digits("abc"), "abc");
    }

    #[test]
    fn test_to_ascii_digit() {
        assert_eq!(to_ascii_digit('۷'), Some('7'));
        assert_eq!(to_ascii_digit('٤'), Some('4'));
        assert_eq!(to_ascii_digit('4'), None);
        assert_eq!(to_ascii_digit('x'), None);
    }
}
