//! Reference validity checks for card data. The form itself never validates;
//! these are for controllers that want the standard rules.

use std::sync::LazyLock;

use regex::Regex;

static EXP_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("hardcoded pattern"));
static CARD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("hardcoded pattern"));

/// Luhn checksum over a string of ASCII digits.
pub fn luhn(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut sum = 0u32;
    let mut alternate = false;
    for b in digits.bytes().rev() {
        let mut digit = (b - b'0') as u32;
        if alternate {
            digit *= 2;
            if digit > 9 {
                digit = digit % 10 + 1;
            }
        }
        alternate = !alternate;
        sum += digit;
    }
    sum % 10 == 0
}

/// 16 digits (separators ignored) passing the Luhn check.
pub fn card_number(text: &str) -> bool {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.len() == 16 && luhn(&digits)
}

/// `MM/YY` with a month between 01 and 12.
pub fn exp_date(text: &str) -> bool {
    EXP_DATE.is_match(text)
}

/// Three or four digits.
pub fn card_code(text: &str) -> bool {
    CARD_CODE.is_match(text)
}
