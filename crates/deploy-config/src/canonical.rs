//! Canonical dependency addresses.
//!
//! The resolver consults a [`CanonicalRegistry`] for the published address of
//! a dependency. [`WormholeContracts`] carries the Wormhole core bridge and
//! token bridge deployments; permit2, oracle and the initial gas token have
//! no canonical value and must come from local configuration.

use std::collections::HashMap;

use crate::types::{ChainId, Dependency, Network};

/// Source of known-good dependency addresses per network and chain.
pub trait CanonicalRegistry {
    fn address(
        &self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
    ) -> Option<String>;
}

/// Published Wormhole deployments on one chain. Some chains only carry the
/// core bridge.
#[derive(Debug, Clone, Copy)]
pub struct WormholeDeployment {
    pub network: Network,
    pub chain_id: ChainId,
    pub chain: &'static str,
    pub core_bridge: &'static str,
    pub token_bridge: Option<&'static str>,
}

pub const SOLANA: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 1,
    chain: "Solana",
    core_bridge: "worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth",
    token_bridge: Some("wormDTUJ6AWPNvk59vGQbDvGJmqbDTdgWgAqcLBCgUb"),
};

pub const ETHEREUM: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 2,
    chain: "Ethereum",
    core_bridge: "0x98f3c9e6E3fAce36bAAd05FE09d375Ef1464288B",
    token_bridge: Some("0x3ee18B2214AFF97000D974cf647E7C347E8fa585"),
};

pub const BSC: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 4,
    chain: "Bsc",
    core_bridge: "0x98f3c9e6E3fAce36bAAd05FE09d375Ef1464288B",
    token_bridge: Some("0xB6F6D86a8f9879A9c87f643768d9efc38c1Da6E7"),
};

pub const POLYGON: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 5,
    chain: "Polygon",
    core_bridge: "0x7A4B5a56256163F07b2C80A7cA55aBE66c4ec4d7",
    token_bridge: Some("0x5a58505a96D1dbf8dF91cB21B54419FC36e93fdE"),
};

pub const AVALANCHE: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 6,
    chain: "Avalanche",
    core_bridge: "0x54a8e5f9c4CbA08F9943965859F6c34eAF03E26c",
    token_bridge: Some("0x0e082F06FF657D94310cB8cE8B0D9a04541d8052"),
};

pub const OASIS: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 7,
    chain: "Oasis",
    core_bridge: "0xfE8cD454b4A1CA468B57D79c0cc77Ef5B6f64585",
    token_bridge: Some("0x5848C791e09901b40A9Ef749f2a6735b418d7564"),
};

pub const FANTOM: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 10,
    chain: "Fantom",
    core_bridge: "0x126783A6Cb203a3E35344528B26ca3a0489a1485",
    token_bridge: Some("0x7C9Fc5741288cDFdD83CeB07f3ea7e22618D79D2"),
};

pub const KARURA: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 11,
    chain: "Karura",
    core_bridge: "0xa321448d90d4e5b0A732867c18eA198e75CAC48E",
    token_bridge: Some("0xae9d7fe007b3327AA64A32824Aaac52C42a6E624"),
};

pub const ACALA: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 12,
    chain: "Acala",
    core_bridge: "0xa321448d90d4e5b0A732867c18eA198e75CAC48E",
    token_bridge: Some("0xae9d7fe007b3327AA64A32824Aaac52C42a6E624"),
};

pub const KLAYTN: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 13,
    chain: "Klaytn",
    core_bridge: "0x0C21603c4f3a6387e241c0091A7EA39E43E90bb7",
    token_bridge: Some("0x5b08ac39EAED75c0439FC750d9FE7E1F9dD0193F"),
};

pub const CELO: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 14,
    chain: "Celo",
    core_bridge: "0xa321448d90d4e5b0A732867c18eA198e75CAC48E",
    token_bridge: Some("0x796Dff6D74F3E27060B71255Fe517BFb23C93eed"),
};

pub const MOONBEAM: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 16,
    chain: "Moonbeam",
    core_bridge: "0xC8e2b0cD52Cf01b0Ce87d389Daa3d414d4cE29f3",
    token_bridge: Some("0xB1731c586ca89a23809861c6103F0b96B3F57D92"),
};

pub const ARBITRUM: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 23,
    chain: "Arbitrum",
    core_bridge: "0xa5f208e072434bC67592E4C49C1B991BA79BCA46",
    token_bridge: Some("0x0b2402144Bb366A632D14B83F244D2e0e21bD39c"),
};

pub const OPTIMISM: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 24,
    chain: "Optimism",
    core_bridge: "0xEe91C335eab126dF5fDB3797EA9d6aD93aeC9722",
    token_bridge: Some("0x1D68124e65faFC907325e3EDbF8c4d84499DAa8b"),
};

pub const BASE: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 30,
    chain: "Base",
    core_bridge: "0xbebdb6C8ddC678FfA9f8748f85C815C556Dd8ac6",
    token_bridge: Some("0x8d2de8d2f73F1F4cAB472AC9A881C9b123C79627"),
};

pub const SCROLL: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 34,
    chain: "Scroll",
    core_bridge: "0xbebdb6C8ddC678FfA9f8748f85C815C556Dd8ac6",
    token_bridge: Some("0x24850c6f61C438823F01B7A3BF2B89B72174Fa9d"),
};

pub const MANTLE: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 35,
    chain: "Mantle",
    core_bridge: "0xbebdb6C8ddC678FfA9f8748f85C815C556Dd8ac6",
    token_bridge: Some("0x24850c6f61C438823F01B7A3BF2B89B72174Fa9d"),
};

pub const BLAST: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 36,
    chain: "Blast",
    core_bridge: "0xbebdb6C8ddC678FfA9f8748f85C815C556Dd8ac6",
    token_bridge: Some("0x24850c6f61C438823F01B7A3BF2B89B72174Fa9d"),
};

pub const XLAYER: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 37,
    chain: "Xlayer",
    core_bridge: "0x194B123c5E96B9b2E49763619985790Dc241CAC0",
    token_bridge: Some("0x5537857664B0f9eFe38C9f320F75fEf23234D904"),
};

pub const BERACHAIN: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 39,
    chain: "Berachain",
    core_bridge: "0xCa1D5a146B03f6303baF59e5AD5615ae0b9d146D",
    token_bridge: None,
};

pub const UNICHAIN: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 44,
    chain: "Unichain",
    core_bridge: "0xCa1D5a146B03f6303baF59e5AD5615ae0b9d146D",
    token_bridge: None,
};

pub const WORLDCHAIN: WormholeDeployment = WormholeDeployment {
    network: Network::Mainnet,
    chain_id: 45,
    chain: "Worldchain",
    core_bridge: "0xcbcEe4e081464A15d8Ad5f58BB493954421eB506",
    token_bridge: None,
};

/// Solana devnet.
pub const SOLANA_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 1,
    chain: "Solana",
    core_bridge: "3u8hJUVTA4jH1wYAyUur7FFZVQ8H635K3tSHHF4ssjQ5",
    token_bridge: Some("DZnkkTmCiFWfYTfT41X3Rd1kDgozqzxWaHqsw6W4x2oe"),
};

pub const BSC_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 4,
    chain: "Bsc",
    core_bridge: "0x68605AD7b15c732a30b1BbC62BE8F2A509D74b4D",
    token_bridge: Some("0x9dcF9D205C9De35334D646BeE44b2D2859712A09"),
};

/// Avalanche Fuji.
pub const AVALANCHE_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 6,
    chain: "Avalanche",
    core_bridge: "0x7bbcE28e64B3F8b84d876Ab298393c38ad7aac4C",
    token_bridge: Some("0x61E44E506Ca5659E6c0bba9b678586fA2d729756"),
};

pub const FANTOM_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10,
    chain: "Fantom",
    core_bridge: "0x1BB3B4119b7BA9dfad76B0545fb3F531383c3bB7",
    token_bridge: Some("0x599CEa2204B4FaECd584Ab1F2b6aCA137a0afbE8"),
};

/// Celo Alfajores.
pub const CELO_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 14,
    chain: "Celo",
    core_bridge: "0x88505117CA88e7dd2eC6EA1E13f0948db2D50D56",
    token_bridge: Some("0x05ca6037eC51F8b712eD2E6Fa72219FEaE74E153"),
};

/// Moonbase Alpha.
pub const MOONBEAM_TESTNET: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 16,
    chain: "Moonbeam",
    core_bridge: "0xa5B7D85a8f27dd7907dc8FdC21FA5657D5E2F901",
    token_bridge: Some("0xbc976D4b9D57E57c3cA52e1Fd136C45FF7955A96"),
};

pub const SEPOLIA: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10002,
    chain: "Sepolia",
    core_bridge: "0x4a8bc80Ed5a4067f1CCf107057b8270E0cC11A78",
    token_bridge: Some("0xDB5492265f6038831E89f495670FF909aDe94bd9"),
};

pub const ARBITRUM_SEPOLIA: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10003,
    chain: "ArbitrumSepolia",
    core_bridge: "0x6b9C8671cdDC8dEab9c719bB87cBd3e782bA6a35",
    token_bridge: Some("0xC7A204bDBFe983FCD8d8E61D02b475D4073fF97e"),
};

pub const BASE_SEPOLIA: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10004,
    chain: "BaseSepolia",
    core_bridge: "0x79A1027a6A159502049F10906D333EC57E95F083",
    token_bridge: Some("0x86F55A04690fd7815A3D802bD587e83eA888B239"),
};

pub const OPTIMISM_SEPOLIA: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10005,
    chain: "OptimismSepolia",
    core_bridge: "0x31377888146f3253211EFEf5c676D41ECe7D58Fe",
    token_bridge: Some("0x99737Ec4B815d816c49A385943baf0380e75c0Ac"),
};

pub const HOLESKY: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10006,
    chain: "Holesky",
    core_bridge: "0xa10f2eF61dE1f19f586ab8B6F2EbA89bACE63F7a",
    token_bridge: Some("0x76d093BbaE4529a342080546cAFEec4AcbA59EC6"),
};

/// Polygon Amoy.
pub const POLYGON_SEPOLIA: WormholeDeployment = WormholeDeployment {
    network: Network::Testnet,
    chain_id: 10007,
    chain: "PolygonSepolia",
    core_bridge: "0x6b9C8671cdDC8dEab9c719bB87cBd3e782bA6a35",
    token_bridge: Some("0xC7A204bDBFe983FCD8d8E61D02b475D4073fF97e"),
};

const ALL_DEPLOYMENTS: &[&WormholeDeployment] = &[
    &SOLANA,
    &ETHEREUM,
    &BSC,
    &POLYGON,
    &AVALANCHE,
    &OASIS,
    &FANTOM,
    &KARURA,
    &ACALA,
    &KLAYTN,
    &CELO,
    &MOONBEAM,
    &ARBITRUM,
    &OPTIMISM,
    &BASE,
    &SCROLL,
    &MANTLE,
    &BLAST,
    &XLAYER,
    &BERACHAIN,
    &UNICHAIN,
    &WORLDCHAIN,
    &SOLANA_TESTNET,
    &BSC_TESTNET,
    &AVALANCHE_TESTNET,
    &FANTOM_TESTNET,
    &CELO_TESTNET,
    &MOONBEAM_TESTNET,
    &SEPOLIA,
    &ARBITRUM_SEPOLIA,
    &BASE_SEPOLIA,
    &OPTIMISM_SEPOLIA,
    &HOLESKY,
    &POLYGON_SEPOLIA,
];

/// Returns the Wormhole deployment for a chain, or `None` if unpublished.
pub fn get_deployment(network: Network, chain_id: ChainId) -> Option<&'static WormholeDeployment> {
    ALL_DEPLOYMENTS
        .iter()
        .find(|d| d.network == network && d.chain_id == chain_id)
        .copied()
}

/// Bundled Wormhole address book.
#[derive(Debug, Clone, Copy, Default)]
pub struct WormholeContracts;

impl CanonicalRegistry for WormholeContracts {
    fn address(
        &self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
    ) -> Option<String> {
        let deployment = get_deployment(network, chain_id)?;
        match dependency {
            Dependency::Wormhole => Some(deployment.core_bridge.to_string()),
            Dependency::TokenBridge => deployment.token_bridge.map(String::from),
            Dependency::Permit2 | Dependency::Oracle | Dependency::InitGasToken => None,
        }
    }
}

/// In-memory registry for custom address books.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<(Dependency, Network, ChainId), String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
        address: impl Into<String>,
    ) {
        self.entries.insert((dependency, network, chain_id), address.into());
    }

    pub fn with(
        mut self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
        address: impl Into<String>,
    ) -> Self {
        self.insert(dependency, network, chain_id, address);
        self
    }
}

impl CanonicalRegistry for StaticRegistry {
    fn address(
        &self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
    ) -> Option<String> {
        self.entries.get(&(dependency, network, chain_id)).cloned()
    }
}

impl<R: CanonicalRegistry + ?Sized> CanonicalRegistry for &R {
    fn address(
        &self,
        dependency: Dependency,
        network: Network,
        chain_id: ChainId,
    ) -> Option<String> {
        (**self).address(dependency, network, chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{is_valid_address, AddressFamily};

    #[test]
    fn ethereum_core_bridge() {
        let addr = WormholeContracts.address(Dependency::Wormhole, Network::Mainnet, 2);
        assert_eq!(
            addr.as_deref(),
            Some("0x98f3c9e6E3fAce36bAAd05FE09d375Ef1464288B")
        );
    }

    #[test]
    fn solana_differs_between_networks() {
        let mainnet = WormholeContracts.address(Dependency::TokenBridge, Network::Mainnet, 1);
        let testnet = WormholeContracts.address(Dependency::TokenBridge, Network::Testnet, 1);
        assert!(mainnet.is_some());
        assert!(testnet.is_some());
        assert_ne!(mainnet, testnet);
    }

    #[test]
    fn non_wormhole_dependencies_have_no_canonical_value() {
        for dep in [Dependency::Permit2, Dependency::Oracle, Dependency::InitGasToken] {
            assert!(WormholeContracts.address(dep, Network::Mainnet, 2).is_none());
        }
    }

    #[test]
    fn unknown_chain_has_no_canonical_value() {
        assert!(WormholeContracts
            .address(Dependency::Wormhole, Network::Testnet, 2)
            .is_none());
        assert!(get_deployment(Network::Mainnet, 9999).is_none());
    }

    #[test]
    fn testnet_chains_resolve() {
        let base_sepolia = WormholeContracts.address(Dependency::Wormhole, Network::Testnet, 10004);
        assert_eq!(
            base_sepolia.as_deref(),
            Some("0x79A1027a6A159502049F10906D333EC57E95F083")
        );
        for chain_id in [4, 6, 10002, 10003, 10005, 10007] {
            assert!(
                WormholeContracts
                    .address(Dependency::TokenBridge, Network::Testnet, chain_id)
                    .is_some(),
                "testnet chain {chain_id}"
            );
        }
    }

    #[test]
    fn newer_mainnets_resolve() {
        for chain_id in [14, 16, 34, 35] {
            assert!(WormholeContracts
                .address(Dependency::Wormhole, Network::Mainnet, chain_id)
                .is_some());
            assert!(WormholeContracts
                .address(Dependency::TokenBridge, Network::Mainnet, chain_id)
                .is_some());
        }
    }

    #[test]
    fn core_only_chain_has_no_token_bridge() {
        assert!(WormholeContracts
            .address(Dependency::Wormhole, Network::Mainnet, 39)
            .is_some());
        assert!(WormholeContracts
            .address(Dependency::TokenBridge, Network::Mainnet, 39)
            .is_none());
    }

    #[test]
    fn all_bundled_addresses_are_well_formed() {
        for d in ALL_DEPLOYMENTS {
            let family = if d.chain == "Solana" {
                AddressFamily::Solana
            } else {
                AddressFamily::Evm
            };
            assert!(is_valid_address(d.core_bridge, family), "{} core bridge", d.chain);
            if let Some(token_bridge) = d.token_bridge {
                assert!(is_valid_address(token_bridge, family), "{} token bridge", d.chain);
            }
        }
    }

    #[test]
    fn bundled_entries_are_unique_per_network_and_chain() {
        for (i, a) in ALL_DEPLOYMENTS.iter().enumerate() {
            for b in &ALL_DEPLOYMENTS[i + 1..] {
                assert!(
                    !(a.network == b.network && a.chain_id == b.chain_id),
                    "duplicate entry for {} on {}",
                    a.chain,
                    a.network
                );
            }
        }
    }

    #[test]
    fn static_registry_lookup() {
        let registry = StaticRegistry::new().with(Dependency::Oracle, Network::Testnet, 4, "0xBBB");
        assert_eq!(
            registry.address(Dependency::Oracle, Network::Testnet, 4).as_deref(),
            Some("0xBBB")
        );
        assert!(registry.address(Dependency::Oracle, Network::Mainnet, 4).is_none());
        assert!((&registry).address(Dependency::Oracle, Network::Testnet, 4).is_some());
    }
}
