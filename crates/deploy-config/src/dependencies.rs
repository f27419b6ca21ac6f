use tracing::{debug, warn};

use crate::address::{ensure_valid, same_address};
use crate::canonical::CanonicalRegistry;
use crate::error::DeployError;
use crate::types::{ChainInfo, DependenciesConfig, Dependency};

/// Resolves dependency addresses from local overrides and a canonical
/// registry. Local configuration wins; the canonical value is the fallback.
pub struct DependencyResolver<'a, R> {
    overrides: &'a [DependenciesConfig],
    canonical: R,
}

impl<'a, R: CanonicalRegistry> DependencyResolver<'a, R> {
    pub fn new(overrides: &'a [DependenciesConfig], canonical: R) -> Self {
        DependencyResolver {
            overrides,
            canonical,
        }
    }

    /// The locally configured address, validated for the chain's family.
    pub fn get_local_dependency_address(
        &self,
        dependency: Dependency,
        chain: &ChainInfo,
    ) -> Result<String, DeployError> {
        let not_configured = || DeployError::DependencyNotConfigured {
            dependency,
            chain_id: chain.chain_id,
        };

        let entry = self
            .overrides
            .iter()
            .find(|d| d.chain_id == chain.chain_id)
            .ok_or_else(not_configured)?;

        let address = entry.get(dependency).ok_or_else(not_configured)?;

        ensure_valid(
            address,
            chain.family(),
            &format!("{dependency} dependency for chain {}", chain.chain_id),
        )?;

        Ok(address.to_string())
    }

    /// The address to use for `dependency` on `chain`.
    pub fn get_dependency_address(
        &self,
        dependency: Dependency,
        chain: &ChainInfo,
    ) -> Result<String, DeployError> {
        let local = self.get_local_dependency_address(dependency, chain);
        let canonical = self
            .canonical
            .address(dependency, chain.network, chain.chain_id);

        match (local, canonical) {
            (Ok(local), Some(canonical)) if same_address(&local, &canonical, chain.family()) => {
                Ok(canonical)
            }
            (Ok(local), canonical) => {
                if canonical.is_some() {
                    debug!(
                        %dependency,
                        chain_id = chain.chain_id,
                        %local,
                        "local dependency overrides canonical address"
                    );
                }
                Ok(local)
            }
            (Err(err), Some(canonical)) => {
                if matches!(err, DeployError::InvalidAddress(_)) {
                    warn!(
                        %dependency,
                        chain_id = chain.chain_id,
                        error = %err,
                        "ignoring invalid local dependency"
                    );
                } else {
                    debug!(
                        %dependency,
                        chain_id = chain.chain_id,
                        error = %err,
                        "using canonical dependency"
                    );
                }
                ensure_valid(
                    &canonical,
                    chain.family(),
                    &format!("canonical {dependency} for chain {}", chain.chain_id),
                )?;
                Ok(canonical)
            }
            (Err(_), None) => Err(DeployError::DependencyNotConfigured {
                dependency,
                chain_id: chain.chain_id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{StaticRegistry, WormholeContracts};
    use crate::types::{ChainKind, CommitmentLevel, Network};

    const LOCAL: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const CANONICAL: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn evm_chain(chain_id: u16) -> ChainInfo {
        ChainInfo {
            name: "Ethereum".into(),
            chain_id,
            rpc: "http://localhost:8545".into(),
            network: Network::Mainnet,
            kind: ChainKind::Evm { external_id: None },
        }
    }

    fn solana_chain() -> ChainInfo {
        ChainInfo {
            name: "Solana".into(),
            chain_id: 1,
            rpc: "http://localhost:8899".into(),
            network: Network::Mainnet,
            kind: ChainKind::Solana {
                commitment_level: CommitmentLevel::Confirmed,
            },
        }
    }

    fn overrides(chain_id: u16, wormhole: Option<&str>) -> Vec<DependenciesConfig> {
        vec![DependenciesConfig {
            chain_id,
            wormhole: wormhole.map(String::from),
            ..Default::default()
        }]
    }

    fn canonical(chain_id: u16, address: &str) -> StaticRegistry {
        StaticRegistry::new().with(Dependency::Wormhole, Network::Mainnet, chain_id, address)
    }

    #[test]
    fn local_lookup_requires_chain_entry() {
        let local = overrides(4, Some(LOCAL));
        let resolver = DependencyResolver::new(&local, StaticRegistry::new());
        let err = resolver
            .get_local_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap_err();
        assert!(matches!(
            err,
            DeployError::DependencyNotConfigured {
                dependency: Dependency::Wormhole,
                chain_id: 2
            }
        ));
    }

    #[test]
    fn local_lookup_requires_field() {
        let local = overrides(2, Some(LOCAL));
        let resolver = DependencyResolver::new(&local, StaticRegistry::new());
        let err = resolver
            .get_local_dependency_address(Dependency::Permit2, &evm_chain(2))
            .unwrap_err();
        assert!(matches!(err, DeployError::DependencyNotConfigured { .. }));
    }

    #[test]
    fn local_lookup_validates_for_chain_family() {
        let local = overrides(1, Some(LOCAL));
        let resolver = DependencyResolver::new(&local, StaticRegistry::new());
        let err = resolver
            .get_local_dependency_address(Dependency::Wormhole, &solana_chain())
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidAddress(_)));
    }

    #[test]
    fn canonical_used_without_local_override() {
        let local = Vec::new();
        let resolver = DependencyResolver::new(&local, canonical(2, CANONICAL));
        let addr = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap();
        assert_eq!(addr, CANONICAL);
    }

    #[test]
    fn canonical_returned_when_local_matches() {
        let lower = CANONICAL.to_lowercase();
        let local = overrides(2, Some(&lower));
        let resolver = DependencyResolver::new(&local, canonical(2, CANONICAL));
        let addr = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap();
        assert_eq!(addr, CANONICAL);
    }

    #[test]
    fn local_wins_when_it_differs() {
        let local = overrides(2, Some(LOCAL));
        let resolver = DependencyResolver::new(&local, canonical(2, CANONICAL));
        let addr = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap();
        assert_eq!(addr, LOCAL);
    }

    #[test]
    fn local_used_without_canonical_value() {
        let local = vec![DependenciesConfig {
            chain_id: 2,
            oracle: Some(LOCAL.into()),
            ..Default::default()
        }];
        let resolver = DependencyResolver::new(&local, WormholeContracts);
        let addr = resolver
            .get_dependency_address(Dependency::Oracle, &evm_chain(2))
            .unwrap();
        assert_eq!(addr, LOCAL);
    }

    #[test]
    fn invalid_local_falls_back_to_canonical() {
        let local = overrides(2, Some("0xAAA"));
        let resolver = DependencyResolver::new(&local, canonical(2, CANONICAL));
        let addr = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap();
        assert_eq!(addr, CANONICAL);
    }

    #[test]
    fn neither_source_is_not_configured() {
        let local = overrides(2, None);
        let resolver = DependencyResolver::new(&local, StaticRegistry::new());
        let err = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No wormhole dependency configured for chain 2"
        );
    }

    #[test]
    fn malformed_canonical_value_is_rejected() {
        let local = Vec::new();
        let resolver = DependencyResolver::new(&local, canonical(2, "0xBBB"));
        let err = resolver
            .get_dependency_address(Dependency::Wormhole, &evm_chain(2))
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidAddress(_)));
    }

    #[test]
    fn bundled_registry_resolves_solana_core_bridge() {
        let local = Vec::new();
        let resolver = DependencyResolver::new(&local, WormholeContracts);
        let addr = resolver
            .get_dependency_address(Dependency::Wormhole, &solana_chain())
            .unwrap();
        assert_eq!(addr, "worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth");
    }
}
