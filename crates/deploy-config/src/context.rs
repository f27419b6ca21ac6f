use std::path::Path;

use tracing::debug;

use crate::canonical::CanonicalRegistry;
use crate::chains::ChainDirectory;
use crate::dependencies::DependencyResolver;
use crate::env::Environment;
use crate::error::DeployError;
use crate::registry::ContractRegistry;
use crate::store::{ConfigStore, DEPENDENCIES, ECOSYSTEM, VERIFICATION_API_KEYS};
use crate::types::{ChainId, ChainInfo, DependenciesConfig, Ecosystem, VerificationApiKeys};

/// Everything loaded for one environment at startup.
///
/// The ecosystem, dependency overrides and verification keys are read once
/// and never reloaded. The contract registry is re-read on every access.
#[derive(Debug, Clone)]
pub struct DeployContext {
    environment: Environment,
    store: ConfigStore,
    directory: ChainDirectory,
    dependencies: Vec<DependenciesConfig>,
    verification_keys: Vec<VerificationApiKeys>,
}

impl DeployContext {
    pub fn load(root: impl AsRef<Path>, environment: Environment) -> Result<Self, DeployError> {
        let store = ConfigStore::new(root, &environment);
        let ecosystem: Ecosystem = store.load(ECOSYSTEM)?;
        let directory = ChainDirectory::from_ecosystem(ecosystem)?;
        let dependencies: Vec<DependenciesConfig> = store.load(DEPENDENCIES)?;
        let verification_keys: Vec<VerificationApiKeys> = store.load(VERIFICATION_API_KEYS)?;

        debug!(
            %environment,
            chains = directory.chains().count(),
            dependencies = dependencies.len(),
            "loaded deployment context"
        );

        Ok(DeployContext {
            environment,
            store,
            directory,
            dependencies,
            verification_keys,
        })
    }

    /// Like [`DeployContext::load`] with the environment taken from `ENV`.
    pub fn from_env(root: impl AsRef<Path>) -> Result<Self, DeployError> {
        Self::load(root, Environment::from_env()?)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn directory(&self) -> &ChainDirectory {
        &self.directory
    }

    pub fn chain(&self, chain_id: ChainId) -> Result<&ChainInfo, DeployError> {
        self.directory.get_chain_info(chain_id)
    }

    pub fn dependencies(&self) -> &[DependenciesConfig] {
        &self.dependencies
    }

    pub fn contracts(&self) -> ContractRegistry<'_> {
        ContractRegistry::new(&self.store).with_directory(&self.directory)
    }

    pub fn resolver<R: CanonicalRegistry>(&self, canonical: R) -> DependencyResolver<'_, R> {
        DependencyResolver::new(&self.dependencies, canonical)
    }

    pub fn verification_keys(
        &self,
        chain_id: ChainId,
    ) -> Result<&VerificationApiKeys, DeployError> {
        self.verification_keys
            .iter()
            .find(|k| k.chain_id == chain_id)
            .ok_or_else(|| {
                DeployError::ConfigNotFound(format!(
                    "failed to find {VERIFICATION_API_KEYS} config for chain {chain_id}"
                ))
            })
    }
}
