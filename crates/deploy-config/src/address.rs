use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// Address format family of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Evm,
    Solana,
}

/// Validate an address string for the given family.
pub fn validate_address(address: &str, family: AddressFamily) -> Result<bool, DeployError> {
    match family {
        AddressFamily::Evm => Ok(chain_eth::validate_address(address)?),
        AddressFamily::Solana => Ok(chain_sol::validate_address(address)?),
    }
}

/// `true` iff `address` is well formed for `family`.
pub fn is_valid_address(address: &str, family: AddressFamily) -> bool {
    matches!(validate_address(address, family), Ok(true))
}

/// Family-agnostic check for callers that do not know the chain yet: EVM is
/// tried first, then Solana.
pub fn looks_valid(address: &str) -> bool {
    is_valid_address(address, AddressFamily::Evm)
        || is_valid_address(address, AddressFamily::Solana)
}

/// Fails with `InvalidAddress` naming `what` unless the address is valid for
/// `family`.
pub fn ensure_valid(address: &str, family: AddressFamily, what: &str) -> Result<(), DeployError> {
    if is_valid_address(address, family) {
        Ok(())
    } else {
        Err(DeployError::InvalidAddress(format!(
            "{what}: {address:?} is not a valid {family:?} address"
        )))
    }
}

/// Like [`ensure_valid`] but accepts either family.
pub fn ensure_looks_valid(address: &str, what: &str) -> Result<(), DeployError> {
    if looks_valid(address) {
        Ok(())
    } else {
        Err(DeployError::InvalidAddress(format!(
            "{what}: {address:?} is neither an EVM nor a Solana address"
        )))
    }
}

/// Compares two addresses of one family. EVM casing only carries a checksum,
/// so EVM addresses compare case-insensitively; Solana base58 is
/// case-sensitive.
pub fn same_address(a: &str, b: &str, family: AddressFamily) -> bool {
    match family {
        AddressFamily::Evm => match (
            chain_eth::normalize_address(a),
            chain_eth::normalize_address(b),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        },
        AddressFamily::Solana => a == b,
    }
}
