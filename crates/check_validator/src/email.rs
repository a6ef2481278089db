//! Email address parsing.

use validator::ValidateEmail;

/// Returns true if `input` is an `addr-spec` or a `Display Name <addr-spec>`
/// mailbox with a valid address.
pub fn is_valid_email(input: &str) -> bool {
    address_part(input).is_some_and(|address| address.validate_email())
}

/// Extracts the address from a mailbox, checking the display name syntax.
fn address_part(input: &str) -> Option<&str> {
    let input = input.trim();
    let Some(open) = input.find('<') else {
        return (!input.contains('>')).then_some(input);
    };

    let address = input[open + 1..].strip_suffix('>')?;
    if address.contains(['<', '>']) || !is_display_name(input[..open].trim()) {
        return None;
    }
    Some(address)
}

fn is_display_name(name: &str) -> bool {
    if let Some(quoted) = name.strip_prefix('"').and_then(|n| n.strip_suffix('"')) {
        return !quoted.contains('"');
    }
    !name.contains(['(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '"'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_addresses() {
        assert!(is_valid_email("007@example.co.uk"));
        assert!(is_valid_email("  m@example.com "));
        assert!(!is_valid_email("test.example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("m@example.com>"));
    }

    #[test]
    fn test_named_mailboxes() {
        assert!(is_valid_email("M <m@example.co.uk>"));
        assert!(is_valid_email("Bob<bob@example.com>"));
        assert!(is_valid_email("<q@example.com>"));
        assert!(is_valid_email("\"Bond, James\" <james@example.com>"));
        assert!(!is_valid_email("Alice <aliceexample.com>"));
        assert!(!is_valid_email("Alice <alice@example.com"));
        assert!(!is_valid_email("a@b.com <c@example.com>"));
        assert!(!is_valid_email("Alice <<alice@example.com>>"));
    }
}
