//! IBAN validation (ISO 13616).

use std::sync::LazyLock;

use regex::Regex;

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$").expect("IBAN pattern is valid")
});

/// Returns true if `iban` is a compact, upper-case IBAN with valid check digits.
pub fn is_valid_iban(iban: &str) -> bool {
    IBAN_PATTERN.is_match(iban) && checksum(iban) == Some(1)
}

/// ISO 7064 mod-97-10 over the rearranged IBAN, letters expanded to 10..=35.
fn checksum(iban: &str) -> Option<u32> {
    let (head, tail) = iban.split_at(4);
    tail.chars().chain(head.chars()).try_fold(0u32, |acc, c| {
        let digit = c.to_digit(36)?;
        let shift = if digit < 10 { 10 } else { 100 };
        Some((acc * shift + digit) % 97)
    })
}
