//! Byte-string codecs for the identifier grammars.
//!
//! Every decoder is total: malformed input yields `None`, never an error.
//! The search classifier tries all of them against every query string and
//! keeps whichever interpretations parse.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use data_encoding::{BASE32_NOPAD, HEXLOWER, HEXLOWER_PERMISSIVE};

/// Number of bytes in an EVM-style address.
pub const EVM_ADDRESS_LEN: usize = 20;

/// Number of bytes in a ledger transaction or block hash (SHA-384).
pub const LEDGER_HASH_LEN: usize = 48;

/// Decode a hex string with optional `0x` prefix. Odd length or a non-hex
/// digit yields `None`.
#[must_use]
pub fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let bare = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if bare.is_empty() || bare.len() % 2 != 0 {
        return None;
    }
    HEXLOWER_PERMISSIVE.decode(bare.as_bytes()).ok()
}

/// Encode bytes as lowercase hex without prefix.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

/// Decode an unpadded RFC 4648 base-32 string (the account alias alphabet).
#[must_use]
pub fn decode_base32(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    BASE32_NOPAD.decode(text.as_bytes()).ok()
}

/// Encode bytes in the unpadded base-32 alias alphabet.
#[must_use]
pub fn encode_base32(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Decode a base-64 string, accepting both the standard and the URL-safe
/// alphabets.
#[must_use]
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    STANDARD
        .decode(text)
        .or_else(|_| URL_SAFE.decode(text))
        .ok()
}

/// Zero-extend a byte string on the left into a 20-byte EVM address.
///
/// Input longer than 20 bytes is never truncated; it simply fails the
/// normalization.
#[must_use]
pub fn zero_extend_to_evm(bytes: &[u8]) -> Option<[u8; EVM_ADDRESS_LEN]> {
    if bytes.len() > EVM_ADDRESS_LEN {
        return None;
    }
    let mut address = [0u8; EVM_ADDRESS_LEN];
    address[EVM_ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
    Some(address)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bare("b2607", None)] // odd length
    #[case::even("0b2607", Some(vec![0x0b, 0x26, 0x07]))]
    #[case::prefixed("0x0b2607", Some(vec![0x0b, 0x26, 0x07]))]
    #[case::upper("0B2607", Some(vec![0x0b, 0x26, 0x07]))]
    #[case::non_hex("0xzz", None)]
    #[case::empty("", None)]
    #[case::prefix_only("0x", None)]
    fn test_decode_hex(#[case] input: &str, #[case] expected: Option<Vec<u8>>) {
        assert_eq!(decode_hex(input), expected);
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes = vec![0x00, 0xff, 0x10, 0xab];
        assert_eq!(decode_hex(&encode_hex(&bytes)), Some(bytes));
    }

    #[test]
    fn test_base32_round_trip() {
        let bytes: Vec<u8> = (0u8..33).collect();
        let text = encode_base32(&bytes);
        assert!(text.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(decode_base32(&text), Some(bytes));
    }

    #[rstest]
    #[case::lowercase("abcdefgh")]
    #[case::padding("MZXW6===")]
    #[case::illegal_char("A1BC")]
    #[case::empty("")]
    fn test_decode_base32_rejects(#[case] input: &str) {
        assert!(decode_base32(input).is_none());
    }

    #[test]
    fn test_decode_base64_both_alphabets() {
        // 0xfb 0xef 0xff encodes with characters that differ per alphabet.
        assert_eq!(decode_base64("++//"), Some(vec![0xfb, 0xef, 0xff]));
        assert_eq!(decode_base64("--__"), Some(vec![0xfb, 0xef, 0xff]));
        assert!(decode_base64("a=b=").is_none());
        assert!(decode_base64("").is_none());
    }

    #[test]
    fn test_zero_extend() {
        let short = vec![0x0b, 0x26, 0x07];
        let address = zero_extend_to_evm(&short).unwrap();
        assert_eq!(&address[..17], &[0u8; 17]);
        assert_eq!(&address[17..], &short[..]);

        let exact = [0x11u8; EVM_ADDRESS_LEN];
        assert_eq!(zero_extend_to_evm(&exact), Some(exact));

        let long = [0u8; EVM_ADDRESS_LEN + 1];
        assert_eq!(zero_extend_to_evm(&long), None);
    }
}
