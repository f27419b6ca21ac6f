//! Solana address validation.
//!
//! The canonical alphabet is the standard Bitcoin Base58 alphabet used by the
//! `bs58` crate. No hashing is involved: the 32 decoded bytes are the key.

use crate::error::SolError;

/// Validate a Solana address string.
///
/// A valid Solana address is a Base58-encoded string that decodes to exactly
/// 32 bytes. Returns `Ok(true)` if valid, or an error if decoding fails or
/// the length is wrong.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_bytes(address).map(|_| true)
}

/// Convenience form of [`validate_address`].
pub fn is_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

/// Decode a Solana address string to its 32-byte representation.
pub fn address_to_bytes(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode 32 bytes as a Solana address (Base58 string).
pub fn bytes_to_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes.
    #[test]
    fn system_program_address() {
        let addr = bytes_to_address(&[0u8; 32]);
        assert_eq!(addr, "11111111111111111111111111111111");
        assert!(validate_address(&addr).unwrap());
    }

    #[test]
    fn wormhole_program_ids_are_valid() {
        assert!(is_address("worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth"));
        assert!(is_address("wormDTUJ6AWPNvk59vGQbDvGJmqbDTdgWgAqcLBCgUb"));
    }

    #[test]
    fn decode_then_encode_keeps_address() {
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let bytes = address_to_bytes(address).unwrap();
        assert_eq!(bytes_to_address(&bytes), address);
    }

    #[test]
    fn validate_garbage_returns_error() {
        assert!(validate_address("not-a-valid-address!!!").is_err());
    }

    #[test]
    fn validate_zero_and_ell_are_not_base58() {
        assert!(!is_address("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"));
    }

    #[test]
    fn validate_too_short_returns_error() {
        // "1" decodes to a single zero byte.
        assert!(validate_address("1").is_err());
    }

    #[test]
    fn evm_address_is_not_solana() {
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    }
}
