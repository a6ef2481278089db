//! VAT identification numbers.

use std::sync::LazyLock;

use regex::Regex;

/// Country prefix and number body for each supported country.
const VAT_FORMATS: &[(&str, &str)] = &[
    ("AT", r"U\d{8}"),
    ("BE", r"[01]\d{9}"),
    ("BG", r"\d{9,10}"),
    ("CY", r"\d{8}[A-Z]"),
    ("CZ", r"\d{8,10}"),
    ("DE", r"\d{9}"),
    ("DK", r"\d{8}"),
    ("EE", r"\d{9}"),
    ("EL", r"\d{9}"),
    ("ES", r"[A-Z0-9]\d{7}[A-Z0-9]"),
    ("FI", r"\d{8}"),
    ("FR", r"[A-HJ-NP-Z0-9]{2}\d{9}"),
    ("HR", r"\d{11}"),
    ("HU", r"\d{8}"),
    ("IE", r"\d[A-Z0-9+*]\d{5}[A-W][A-I]?"),
    ("IT", r"\d{11}"),
    ("LT", r"\d{9}|\d{12}"),
    ("LU", r"\d{8}"),
    ("LV", r"\d{11}"),
    ("MT", r"\d{8}"),
    ("NL", r"\d{9}B\d{2}"),
    ("PL", r"\d{10}"),
    ("PT", r"\d{9}"),
    ("RO", r"\d{2,10}"),
    ("SE", r"\d{10}01"),
    ("SI", r"\d{8}"),
    ("SK", r"\d{10}"),
    ("CH", r"E\d{9}(?:MWST|TVA|IVA)?"),
    ("NO", r"\d{9}(?:MVA)?"),
];

static VAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = VAT_FORMATS
        .iter()
        .map(|(country, body)| format!("{country}(?:{body})"))
        .collect();
    Regex::new(&format!("^(?:{})$", alternatives.join("|"))).expect("VAT patterns are valid")
});

/// Returns true if `vat` is a country prefix followed by a well-formed number.
pub fn is_valid_vat(vat: &str) -> bool {
    VAT_PATTERN.is_match(vat)
}
