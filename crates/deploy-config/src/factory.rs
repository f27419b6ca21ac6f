//! Explicit contract-name to handle-constructor map.
//!
//! Deployment scripts register one constructor per contract binding when
//! they start. Connecting to a contract looks the name up here; names that
//! were never registered fail with `UnknownContract` instead of being
//! resolved at runtime.

use std::collections::HashMap;

use crate::error::DeployError;
use crate::registry::ContractRegistry;
use crate::types::ChainInfo;

/// Produces the signer used to talk to a chain. Provided by the caller.
pub trait SignerProvider {
    type Signer;

    fn signer_for(&self, chain: &ChainInfo) -> Result<Self::Signer, DeployError>;
}

/// Builds a contract handle `H` from an address and a signer `S`.
pub type ContractFactory<S, H> = fn(&str, S) -> H;

pub struct ContractFactories<S, H> {
    factories: HashMap<String, ContractFactory<S, H>>,
}

impl<S, H> Default for ContractFactories<S, H> {
    fn default() -> Self {
        ContractFactories {
            factories: HashMap::new(),
        }
    }
}

impl<S, H> ContractFactories<S, H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, factory: ContractFactory<S, H>) {
        self.factories.insert(name.into(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Connects to `name` at `address` with a signer for `chain`.
    pub fn connect<P>(
        &self,
        name: &str,
        address: &str,
        chain: &ChainInfo,
        provider: &P,
    ) -> Result<H, DeployError>
    where
        P: SignerProvider<Signer = S>,
    {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| DeployError::UnknownContract(name.to_string()))?;
        let signer = provider.signer_for(chain)?;
        Ok(factory(address, signer))
    }

    /// Connects to the address recorded for `name` on `chain`.
    pub fn connect_deployed<P>(
        &self,
        registry: &ContractRegistry<'_>,
        name: &str,
        chain: &ChainInfo,
        provider: &P,
    ) -> Result<H, DeployError>
    where
        P: SignerProvider<Signer = S>,
    {
        let address = registry.get_contract_address(name, chain.chain_id)?;
        self.connect(name, &address, chain, provider)
    }
}
