use std::collections::BTreeSet;

use serde::de::DeserializeOwned;

use crate::error::DeployError;
use crate::store::ConfigStore;
use crate::types::{ChainId, ChainInfo, ChainScoped, Ecosystem};

/// Chain metadata of one environment, built from `ecosystem.json`.
#[derive(Debug, Clone)]
pub struct ChainDirectory {
    /// EVM chains first, then the Solana chain, in document order.
    chains: Vec<ChainInfo>,
    evm_count: usize,
    operating_chains: Option<Vec<ChainId>>,
}

impl ChainDirectory {
    /// Builds the directory, rejecting topologies with more than one Solana
    /// network or with a chain id listed twice.
    pub fn from_ecosystem(ecosystem: Ecosystem) -> Result<Self, DeployError> {
        if ecosystem.solana.networks.len() > 1 {
            return Err(DeployError::InvalidTopology(format!(
                "expected at most one Solana network, found {}",
                ecosystem.solana.networks.len()
            )));
        }

        let evm_count = ecosystem.evm.networks.len();
        let chains: Vec<ChainInfo> = ecosystem
            .evm
            .networks
            .into_iter()
            .map(ChainInfo::from)
            .chain(ecosystem.solana.networks.into_iter().map(ChainInfo::from))
            .collect();

        let mut seen = BTreeSet::new();
        for chain in &chains {
            if !seen.insert(chain.chain_id) {
                return Err(DeployError::InvalidTopology(format!(
                    "chain id {} is listed more than once",
                    chain.chain_id
                )));
            }
        }

        Ok(ChainDirectory {
            chains,
            evm_count,
            operating_chains: ecosystem.operating_chains,
        })
    }

    pub fn get_chain_info(&self, chain_id: ChainId) -> Result<&ChainInfo, DeployError> {
        self.chains
            .iter()
            .find(|c| c.chain_id == chain_id)
            .ok_or(DeployError::ChainNotFound(chain_id))
    }

    pub fn chains(&self) -> impl Iterator<Item = &ChainInfo> {
        self.chains.iter()
    }

    pub fn evm_chains(&self) -> &[ChainInfo] {
        &self.chains[..self.evm_count]
    }

    pub fn solana_chain(&self) -> Option<&ChainInfo> {
        self.chains.get(self.evm_count)
    }

    /// Chains deployment scripts should act on: the `operatingChains` list in
    /// its order, or every chain when the list is absent.
    pub fn operating_chains(&self) -> Result<Vec<&ChainInfo>, DeployError> {
        match &self.operating_chains {
            Some(ids) => ids.iter().map(|id| self.get_chain_info(*id)).collect(),
            None => Ok(self.chains.iter().collect()),
        }
    }
}

/// Loads the array document `kind` and returns the entry for `chain_id`.
pub fn get_chain_config<T>(
    store: &ConfigStore,
    kind: &str,
    chain_id: ChainId,
) -> Result<T, DeployError>
where
    T: DeserializeOwned + ChainScoped,
{
    let entries: Vec<T> = store.load(kind)?;
    entries
        .into_iter()
        .find(|entry| entry.chain_id() == chain_id)
        .ok_or_else(|| {
            DeployError::ConfigNotFound(format!(
                "failed to find {kind} config for chain {chain_id}"
            ))
        })
}
