//! Solana address handling for deployment tooling.
//!
//! Solana addresses (program ids, PDAs, wallets) are Base58-encoded 32-byte
//! public keys. Validation is purely about the encoding; whether a key lies
//! on the Ed25519 curve does not matter, since program-derived addresses are
//! deliberately off-curve.

pub mod address;
pub mod error;

pub use address::{address_to_bytes, bytes_to_address, is_address, validate_address};
pub use error::SolError;
