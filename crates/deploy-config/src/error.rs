use thiserror::Error;

use crate::types::{ChainId, Dependency};

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Env var not set: {0}")]
    MissingEnv(String),

    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("Failed to serialize {path}: {message}")]
    Serialize { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Failed to find chain info for chain id: {0}")]
    ChainNotFound(ChainId),

    #[error("No {dependency} dependency configured for chain {chain_id}")]
    DependencyNotConfigured {
        dependency: Dependency,
        chain_id: ChainId,
    },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("No {name} contract found for chain {chain_id}")]
    ContractNotFound { name: String, chain_id: ChainId },

    #[error("No constructorArgs found for {name} contract for chain {chain_id}")]
    ArgsNotFound { name: String, chain_id: ChainId },

    #[error("No factory registered for contract: {0}")]
    UnknownContract(String),

    #[error("Signer unavailable: {0}")]
    Signer(String),
}

impl From<chain_eth::EthError> for DeployError {
    fn from(e: chain_eth::EthError) -> Self {
        DeployError::InvalidAddress(format!("EVM: {e}"))
    }
}

impl From<chain_sol::SolError> for DeployError {
    fn from(e: chain_sol::SolError) -> Self {
        DeployError::InvalidAddress(format!("SOL: {e}"))
    }
}
