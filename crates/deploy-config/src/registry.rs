//! The deployed-contract registry (`contracts.json`).
//!
//! Reads reload the document every time, so an address written by
//! [`ContractRegistry::write_deployed_contract`] is visible to the next read.
//! Writes edit the parsed document in place: contract order, unknown fields
//! and number text of untouched entries survive. They are a plain
//! read-modify-write without locking, so two processes writing the same
//! environment concurrently can lose one update.

use serde_json::{json, Map, Value};
use tracing::info;

use crate::address::{ensure_looks_valid, ensure_valid};
use crate::chains::ChainDirectory;
use crate::error::DeployError;
use crate::store::{ConfigStore, CONTRACTS};
use crate::types::{ChainId, ConstructorArg, ContractsJson, Deployment};

pub struct ContractRegistry<'a> {
    store: &'a ConfigStore,
    directory: Option<&'a ChainDirectory>,
}

impl<'a> ContractRegistry<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        ContractRegistry {
            store,
            directory: None,
        }
    }

    /// Validate stored addresses against the family of their chain. Chains
    /// missing from the directory fall back to accepting either family.
    pub fn with_directory(mut self, directory: &'a ChainDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn load(&self) -> Result<ContractsJson, DeployError> {
        self.store.load(CONTRACTS)
    }

    /// All deployments recorded for `name`, empty if none.
    pub fn deployments(&self, name: &str) -> Result<Vec<Deployment>, DeployError> {
        Ok(self.load()?.shift_remove(name).unwrap_or_default())
    }

    fn find(&self, name: &str, chain_id: ChainId) -> Result<Option<Deployment>, DeployError> {
        Ok(self
            .deployments(name)?
            .into_iter()
            .find(|d| d.chain_id == chain_id))
    }

    pub fn get_contract_address(
        &self,
        name: &str,
        chain_id: ChainId,
    ) -> Result<String, DeployError> {
        let deployment = self
            .find(name, chain_id)?
            .ok_or_else(|| DeployError::ContractNotFound {
                name: name.to_string(),
                chain_id,
            })?;

        let what = format!("{name} contract for chain {chain_id}");
        let chain = self
            .directory
            .and_then(|dir| dir.get_chain_info(chain_id).ok());
        match chain {
            Some(chain) => ensure_valid(&deployment.address, chain.family(), &what)?,
            None => ensure_looks_valid(&deployment.address, &what)?,
        }

        Ok(deployment.address)
    }

    pub fn get_constructor_args(
        &self,
        name: &str,
        chain_id: ChainId,
    ) -> Result<Vec<ConstructorArg>, DeployError> {
        self.find(name, chain_id)?
            .and_then(|d| d.constructor_args)
            .ok_or_else(|| DeployError::ArgsNotFound {
                name: name.to_string(),
                chain_id,
            })
    }

    /// Records a deployment, replacing any previous entry for the same
    /// contract and chain in place. The address is stored as given.
    pub fn write_deployed_contract(
        &self,
        chain_id: ChainId,
        name: &str,
        address: &str,
        constructor_args: Vec<ConstructorArg>,
    ) -> Result<(), DeployError> {
        let mut document: Map<String, Value> = self.store.load(CONTRACTS)?;
        let args = Value::Array(constructor_args.into_iter().map(Value::from).collect());

        let entries = document
            .entry(name)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| DeployError::ConfigParse {
                path: self.store.path(CONTRACTS).display().to_string(),
                message: format!("{name} is not a list of deployments"),
            })?;

        let existing = entries
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|d| d.get("chainId").and_then(Value::as_u64) == Some(u64::from(chain_id)));
        match existing {
            Some(entry) => {
                entry.insert("address".to_string(), Value::String(address.to_string()));
                entry.insert("constructorArgs".to_string(), args);
            }
            None => entries.push(json!({
                "chainId": chain_id,
                "address": address,
                "constructorArgs": args,
            })),
        }

        self.store.save(CONTRACTS, &document)?;
        info!(contract = name, chain_id, address, "recorded deployed contract");
        Ok(())
    }
}
