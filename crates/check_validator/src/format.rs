//! Well-known string format checks.

use std::fmt;

use validator::{ValidateIp, ValidateUrl};

use crate::email::is_valid_email;
use crate::iban::is_valid_iban;
use crate::network::is_valid_mac;
use crate::required::blank;
use crate::text::{is_blank, strip_spaces};
use crate::vat::is_valid_vat;
use crate::{Validate, ValidationError};

/// The formats a [`Format`] check can test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Email,
    EmailList,
    Url,
    Iban,
    Vat,
    Ip,
    Mac,
}

impl FormatKind {
    /// All format kinds.
    pub const ALL: [FormatKind; 7] = [
        FormatKind::Email,
        FormatKind::EmailList,
        FormatKind::Url,
        FormatKind::Iban,
        FormatKind::Vat,
        FormatKind::Ip,
        FormatKind::Mac,
    ];

    /// Short identifier, as used in rule files.
    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Email => "email",
            FormatKind::EmailList => "email_list",
            FormatKind::Url => "url",
            FormatKind::Iban => "iban",
            FormatKind::Vat => "vat",
            FormatKind::Ip => "ip",
            FormatKind::Mac => "mac",
        }
    }

    /// Human-readable label used in failure messages.
    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Email | FormatKind::EmailList => "email address",
            FormatKind::Url => "URL",
            FormatKind::Iban => "IBAN",
            FormatKind::Vat => "VAT number",
            FormatKind::Ip => "IP address",
            FormatKind::Mac => "mac address",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            FormatKind::Email => "email address cannot be empty",
            FormatKind::EmailList => "email address list cannot be empty",
            FormatKind::Url => "URL cannot be empty",
            FormatKind::Iban => "IBAN cannot be empty",
            FormatKind::Vat => "VAT number cannot be empty",
            FormatKind::Ip => "IP address cannot be empty",
            FormatKind::Mac => "MAC address cannot be empty",
        }
    }

    /// Returns true if `value` is a valid instance of this format.
    ///
    /// Unlike [`Format`], blank input is simply invalid here.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FormatKind::Email => is_valid_email(value),
            FormatKind::EmailList => first_invalid_email(&strip_spaces(value)).is_none(),
            FormatKind::Url => value.validate_url(),
            FormatKind::Iban => is_valid_iban(value),
            FormatKind::Vat => is_valid_vat(value),
            FormatKind::Ip => value.validate_ip(),
            FormatKind::Mac => is_valid_mac(value),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format check over a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    kind: FormatKind,
    value: String,
    required: bool,
}

impl Format {
    /// Creates a format check.
    ///
    /// A blank `value` succeeds unless `required` is set.
    pub fn new(kind: FormatKind, value: impl Into<String>, required: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            required,
        }
    }

    /// Returns the format being checked.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }
}

impl Validate for Format {
    fn evaluate(&self) -> Result<(), ValidationError> {
        if self.kind == FormatKind::EmailList {
            return check_email_list(&self.value, self.required);
        }

        if is_blank(&self.value) {
            return blank(self.required, self.kind.empty_message());
        }
        if self.kind.accepts(&self.value) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(self.kind, &self.value))
        }
    }
}

fn check_email_list(list: &str, required: bool) -> Result<(), ValidationError> {
    let list = strip_spaces(list);
    if list.is_empty() {
        return blank(required, FormatKind::EmailList.empty_message());
    }
    match first_invalid_email(&list) {
        Some(segment) => Err(ValidationError::invalid_format(FormatKind::Email, segment)),
        None => Ok(()),
    }
}

fn first_invalid_email(list: &str) -> Option<&str> {
    list.split(',').find(|segment| !is_valid_email(segment))
}

/// Checks an email address, bare or in `Name <address>` form.
pub fn email(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Email, value, required)
}

/// Checks a comma-separated list of email addresses.
///
/// Whitespace anywhere in the list is ignored. The first invalid entry is
/// reported.
pub fn email_list(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::EmailList, value, required)
}

/// Checks an absolute URL.
pub fn url(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Url, value, required)
}

/// Checks an IBAN, including its mod-97 check digits.
pub fn iban(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Iban, value, required)
}

/// Checks a European VAT number (EU member states, Switzerland, Norway).
pub fn vat(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Vat, value, required)
}

/// Checks an IPv4 or IPv6 address.
pub fn ip(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Ip, value, required)
}

/// Checks a MAC address (EUI-48, EUI-64 or 20-octet InfiniBand).
pub fn mac(value: impl Into<String>, required: bool) -> Format {
    Format::new(FormatKind::Mac, value, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(check: Format) -> String {
        check.evaluate().unwrap_err().to_string()
    }

    #[test]
    fn test_blank_values() {
        for kind in FormatKind::ALL {
            assert!(Format::new(kind, "", false).evaluate().is_ok());
            assert!(Format::new(kind, "  ", false).evaluate().is_ok());
            assert!(matches!(
                Format::new(kind, "", true).evaluate(),
                Err(ValidationError::Empty { .. })
            ));
        }
        assert_eq!(message(email("", true)), "email address cannot be empty");
        assert_eq!(message(email_list(" ", true)), "email address list cannot be empty");
        assert_eq!(message(mac("", true)), "MAC address cannot be empty");
    }

    #[test]
    fn test_email() {
        assert!(email("007@example.co.uk", true).evaluate().is_ok());
        assert!(email("M <m@example.co.uk>", true).evaluate().is_ok());
        assert_eq!(
            message(email("test.example.com", true)),
            "invalid email address `test.example.com`"
        );
        assert_eq!(
            message(email("Alice <aliceexample.com>", true)),
            "invalid email address `Alice <aliceexample.com>`"
        );
    }

    #[test]
    fn test_email_list() {
        assert!(email_list("M <m@example.co.uk>, Q <q@example.co.uk>", true)
            .evaluate()
            .is_ok());
        assert!(email_list("Alice <alice@example.com>", true).evaluate().is_ok());
        assert_eq!(
            message(email_list("eve@example.com, Bob <bobexample.com>", true)),
            "invalid email address `Bob<bobexample.com>`"
        );
        assert_eq!(
            message(email_list("Bob <bob@example.com>,,", true)),
            "invalid email address ``"
        );
    }

    #[test]
    fn test_url() {
        assert!(url("https://bond.example.com", true).evaluate().is_ok());
        assert_eq!(message(url("test@example", true)), "invalid URL `test@example`");
        assert_eq!(
            message(url("https://example com", true)),
            "invalid URL `https://example com`"
        );
    }

    #[test]
    fn test_iban() {
        assert!(iban("IE64IRCE92050112345678", true).evaluate().is_ok());
        assert!(iban("SV43ACAT00000000000000123123", true).evaluate().is_ok());
        assert_eq!(message(iban("ALB3520111", true)), "invalid IBAN `ALB3520111`");
        assert_eq!(
            message(iban("00CY2100200195000035700123", true)),
            "invalid IBAN `00CY2100200195000035700123`"
        );
    }

    #[test]
    fn test_vat() {
        assert!(vat("NO939194428", true).evaluate().is_ok());
        assert!(vat("ATU00000024", true).evaluate().is_ok());
        assert_eq!(message(vat("ZY1234567", true)), "invalid VAT number `ZY1234567`");
        assert_eq!(message(vat("AT0000", true)), "invalid VAT number `AT0000`");
    }

    #[test]
    fn test_ip() {
        assert!(ip("127.0.0.1", true).evaluate().is_ok());
        assert!(ip("::1", true).evaluate().is_ok());
        assert_eq!(
            message(ip("192.168.100.256", true)),
            "invalid IP address `192.168.100.256`"
        );
        assert_eq!(message(ip("23.55.3212", true)), "invalid IP address `23.55.3212`");
    }

    #[test]
    fn test_mac() {
        assert!(mac("A3:4D:7A:8A:50:B8", true).evaluate().is_ok());
        assert!(mac("5F-7C-F5-12-FF-E7", true).evaluate().is_ok());
        assert_eq!(
            message(mac("00:0a:95:9d:68:16:00", true)),
            "invalid mac address `00:0a:95:9d:68:16:00`"
        );
        assert_eq!(
            message(mac("77-6B-00--79-DF-4C", true)),
            "invalid mac address `77-6B-00--79-DF-4C`"
        );
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FormatKind::Iban.accepts("IE64IRCE92050112345678"));
        assert!(!FormatKind::Email.accepts(""));
        assert_eq!(FormatKind::EmailList.name(), "email_list");
        assert_eq!(FormatKind::EmailList.to_string(), "email address");
    }
}
