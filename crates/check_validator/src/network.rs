//! Hardware address parsing.

/// Returns true if `mac` is an IEEE 802 MAC-48, EUI-48, EUI-64 or 20-octet
/// InfiniBand link-layer address.
///
/// Accepted notations: `00:00:5e:00:53:01`, `00-00-5e-00-53-01` and
/// `0000.5e00.5301`.
pub fn is_valid_mac(mac: &str) -> bool {
    let bytes = mac.as_bytes();
    let (separator, group_len) = match (bytes.get(2), bytes.get(4)) {
        (Some(b':'), _) => (':', 2),
        (Some(b'-'), _) => ('-', 2),
        (_, Some(b'.')) => ('.', 4),
        _ => return false,
    };

    let groups: Vec<&str> = mac.split(separator).collect();
    let octets = groups.len() * group_len / 2;
    matches!(octets, 6 | 8 | 20)
        && groups
            .iter()
            .all(|group| group.len() == group_len && group.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_notations() {
        for mac in [
            "A3:4D:7A:8A:50:B8",
            "00:A0:C9:14:C8:29",
            "5F-7C-F5-12-FF-E7",
            "0000.5e00.5301",
            "02:00:5e:10:00:00:00:01",
            "0200.5e10.0000.0001",
            "00:00:00:00:fe:80:00:00:00:00:00:00:02:00:5e:10:00:00:00:01",
        ] {
            assert!(is_valid_mac(mac), "{mac} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for mac in [
            "00:0a:95:9d:68:16:00",
            "77-6B-00--79-DF-4C",
            "00:0a:95:9d:68",
            "00:0a-95:9d:68:16",
            "0G:0a:95:9d:68:16",
            "000a.959d.6816.",
            "",
        ] {
            assert!(!is_valid_mac(mac), "{mac} should be invalid");
        }
    }
}
