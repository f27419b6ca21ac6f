use sha3::{Digest, Keccak256};

use crate::error::EthError;

/// Strips the `0x`/`0X` prefix and checks the remainder is exactly 40 hex
/// characters.
fn hex_body(address: &str) -> Result<&str, EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    Ok(hex_part)
}

/// Validates an EVM address string.
///
/// Checks that the address has the correct format (0x + 40 hex characters).
/// If the address contains mixed case, the EIP-55 checksum is verified and
/// `Ok(false)` is returned when it does not match.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let hex_part = hex_body(address)?;

    // All-lowercase or all-uppercase carries no checksum.
    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    let checksummed = checksum_address(address)?;
    Ok(&checksummed[2..] == hex_part)
}

/// Returns `true` only for well-formed addresses whose checksum (if any)
/// verifies.
pub fn is_address(address: &str) -> bool {
    matches!(validate_address(address), Ok(true))
}

/// Applies EIP-55 mixed-case checksum encoding to an EVM address.
///
/// Input casing is ignored. Returns the `0x`-prefixed checksummed form.
pub fn checksum_address(address: &str) -> Result<String, EthError> {
    let hex_part = hex_body(address)?.to_lowercase();

    // EIP-55: hash the lowercase hex address (without 0x).
    let hash = Keccak256::digest(hex_part.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in hex_part.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

/// Lowercases a well-formed address so two spellings of the same address
/// compare equal. The checksum is not consulted.
pub fn normalize_address(address: &str) -> Result<String, EthError> {
    let hex_part = hex_body(address)?;
    Ok(format!("0x{}", hex_part.to_lowercase()))
}

/// Decodes a `0x`-prefixed hex byte string of any even length.
pub fn decode_hex_bytes(value: &str) -> Result<Vec<u8>, EthError> {
    let body = value
        .strip_prefix("0x")
        .ok_or_else(|| EthError::EncodingError("hex bytes must start with 0x".into()))?;

    hex::decode(body).map_err(|e| EthError::EncodingError(format!("hex decode failed: {e}")))
}

/// Encodes bytes as lowercase `0x`-prefixed hex.
pub fn encode_hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eip55_checksum_known_addresses() {
        // Test vectors from EIP-55.
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in &cases {
            let lower = format!("0x{}", expected[2..].to_lowercase());
            let result = checksum_address(&lower).unwrap();
            assert_eq!(&result, expected, "checksum mismatch for {}", expected);
        }
    }

    #[test]
    fn checksum_ignores_input_case() {
        let input = "0X5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        let result = checksum_address(input).unwrap();
        assert_eq!(result, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn validate_valid_checksummed_address() {
        assert!(validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap());
    }

    #[test]
    fn validate_all_lowercase_address() {
        assert!(validate_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap());
    }

    #[test]
    fn validate_all_uppercase_address() {
        assert!(validate_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap());
    }

    #[test]
    fn validate_bad_checksum_returns_false() {
        let addr = "0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(!validate_address(addr).unwrap());
        assert!(!is_address(addr));
    }

    #[test]
    fn validate_short_address_errors() {
        assert!(validate_address("0x5aAeb6053F").is_err());
        assert!(!is_address("0x5aAeb6053F"));
    }

    #[test]
    fn validate_no_prefix_errors() {
        assert!(validate_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn validate_non_hex_chars_errors() {
        assert!(validate_address("0xGGGGb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn solana_address_is_not_evm() {
        assert!(!is_address("worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth"));
    }

    #[test]
    fn normalize_lowercases() {
        let a = normalize_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        let b = normalize_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap();
        assert_eq!(a, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        assert_eq!(a, b);
    }

    #[test]
    fn decode_hex_bytes_roundtrip() {
        assert_eq!(decode_hex_bytes("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex_bytes("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn encode_hex_bytes_is_lowercase_and_prefixed() {
        assert_eq!(encode_hex_bytes(&[0xde, 0xad, 0xBE, 0xef]), "0xdeadbeef");
        assert_eq!(encode_hex_bytes(&[]), "0x");
        assert_eq!(decode_hex_bytes(&encode_hex_bytes(&[0, 1, 255])).unwrap(), vec![0, 1, 255]);
    }

    #[test]
    fn decode_hex_bytes_rejects_odd_length_and_missing_prefix() {
        assert!(decode_hex_bytes("0xabc").is_err());
        assert!(decode_hex_bytes("deadbeef").is_err());
    }
}
