use thiserror::Error;

/// EVM address and encoding errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("encoding error: {0}")]
    EncodingError(String),
}
