//! EVM address handling for deployment tooling.
//!
//! This crate provides:
//! - Format validation of `0x`-prefixed 20-byte addresses, with EIP-55
//!   checksum verification for mixed-case input
//! - EIP-55 checksum encoding
//! - Lowercase normalization for comparing addresses regardless of casing
//! - `0x`-hex byte string decoding and encoding (used for constructor arguments)

pub mod address;
pub mod error;

pub use address::{
    checksum_address, decode_hex_bytes, encode_hex_bytes, is_address, normalize_address,
    validate_address,
};
pub use error::EthError;
