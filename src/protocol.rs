//! IANA protocol number normalization
//!
//! Flow log records carry the transport protocol as a numeric IANA
//! identifier. Reports and lookup keys use canonical lowercase names
//! instead, so the well-known numbers are translated once at parse
//! time and anything else passes through lowercased.

/// Translates a protocol token to its canonical lowercase name.
///
/// Known numeric identifiers map to their IANA keyword ("1" → "icmp",
/// "6" → "tcp", "17" → "udp"); any other token is returned lowercased,
/// unchanged. Total and idempotent.
pub fn normalize(token: &str) -> String {
    match token {
        "1" => "icmp".to_string(),
        "6" => "tcp".to_string(),
        "17" => "udp".to_string(),
        other => other.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_protocol_numbers() {
        assert_eq!(normalize("1"), "icmp");
        assert_eq!(normalize("6"), "tcp");
        assert_eq!(normalize("17"), "udp");
    }

    #[test]
    fn test_unknown_number_passes_through() {
        assert_eq!(normalize("41"), "41");
        assert_eq!(normalize("0"), "0");
        assert_eq!(normalize("255"), "255");
    }

    #[test]
    fn test_names_are_lowercased() {
        assert_eq!(normalize("TCP"), "tcp");
        assert_eq!(normalize("Udp"), "udp");
    }

    #[test]
    fn test_idempotent() {
        for token in ["1", "6", "17", "41", "tcp", "udp", "icmp"] {
            let once = normalize(token);
            assert_eq!(normalize(&once), once);
        }
    }
}
