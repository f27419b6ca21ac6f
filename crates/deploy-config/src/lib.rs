//! Contract and dependency address resolution for multi-chain deployments.
//!
//! Each environment (`mainnet`, `testnet`, ...) owns a directory of JSON
//! documents: the chain topology, local dependency overrides, the registry of
//! deployed contracts and explorer verification keys. This crate loads those
//! documents into a [`DeployContext`], resolves dependency addresses against
//! a canonical address book, and keeps the contract registry up to date.
//!
//! Addresses are checked against the format of the chain they belong to
//! (EVM via `chain-eth`, Solana via `chain-sol`) before being handed out.

pub mod address;
pub mod canonical;
pub mod chains;
pub mod context;
pub mod dependencies;
pub mod env;
pub mod error;
pub mod factory;
pub mod registry;
pub mod store;
pub mod types;

pub use address::{is_valid_address, looks_valid, AddressFamily};
pub use canonical::{CanonicalRegistry, StaticRegistry, WormholeContracts};
pub use chains::{get_chain_config, ChainDirectory};
pub use context::DeployContext;
pub use dependencies::DependencyResolver;
pub use env::Environment;
pub use error::DeployError;
pub use factory::{ContractFactories, ContractFactory, SignerProvider};
pub use registry::ContractRegistry;
pub use store::ConfigStore;
pub use types::{
    ChainId, ChainInfo, ChainKind, ConstructorArg, Deployment, Dependency, DependenciesConfig,
    Network, VerificationApiKeys,
};
