use thiserror::Error;

/// Solana address errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
