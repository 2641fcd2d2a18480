//! Latin-1 (ISO-8859-1) decoding.
//!
//! Every byte maps to the Unicode code point with the same value, so decoding never fails.

/// Decode Latin-1 bytes into a `String`.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode(b"Zon 1;1.2"), "Zon 1;1.2");
    }

    #[test]
    fn test_decode_swedish() {
        // "Kök" and "Hall å" in Latin-1
        assert_eq!(decode(&[0x4B, 0xF6, 0x6B]), "Kök");
        assert_eq!(decode(&[0x48, 0x61, 0x6C, 0x6C, 0x20, 0xE5]), "Hall å");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&[]), "");
    }
}
