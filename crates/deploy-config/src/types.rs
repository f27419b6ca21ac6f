use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::AddressFamily;

/// Wormhole chain identifier (not the network's native chain id).
pub type ChainId = u16;

/// Network a chain belongs to, as written in `ecosystem.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("Mainnet"),
            Network::Testnet => f.write_str("Testnet"),
        }
    }
}

/// Solana RPC commitment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    Processed,
    Confirmed,
    Finalized,
}

/// EVM network entry of the ecosystem document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmChainInfo {
    pub name: String,
    pub chain_id: ChainId,
    pub rpc: String,
    pub network: Network,
    /// Native (e.g. EIP-155) chain id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Solana network entry of the ecosystem document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaChainInfo {
    pub name: String,
    pub chain_id: ChainId,
    pub rpc: String,
    pub network: Network,
    pub commitment_level: CommitmentLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkList<T> {
    pub networks: Vec<T>,
}

/// `ecosystem.json`: the chain topology of one environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ecosystem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_chains: Option<Vec<ChainId>>,
    pub evm: NetworkList<EvmChainInfo>,
    pub solana: NetworkList<SolanaChainInfo>,
}

/// Family-specific part of a [`ChainInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum ChainKind {
    Evm {
        #[serde(rename = "externalId", skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
    },
    Solana {
        #[serde(rename = "commitmentLevel")]
        commitment_level: CommitmentLevel,
    },
}

/// Static metadata for one chain of the topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub name: String,
    pub chain_id: ChainId,
    pub rpc: String,
    pub network: Network,
    #[serde(flatten)]
    pub kind: ChainKind,
}

impl ChainInfo {
    /// Address format used on this chain.
    pub fn family(&self) -> AddressFamily {
        match self.kind {
            ChainKind::Evm { .. } => AddressFamily::Evm,
            ChainKind::Solana { .. } => AddressFamily::Solana,
        }
    }
}

impl From<EvmChainInfo> for ChainInfo {
    fn from(c: EvmChainInfo) -> Self {
        ChainInfo {
            name: c.name,
            chain_id: c.chain_id,
            rpc: c.rpc,
            network: c.network,
            kind: ChainKind::Evm {
                external_id: c.external_id,
            },
        }
    }
}

impl From<SolanaChainInfo> for ChainInfo {
    fn from(c: SolanaChainInfo) -> Self {
        ChainInfo {
            name: c.name,
            chain_id: c.chain_id,
            rpc: c.rpc,
            network: c.network,
            kind: ChainKind::Solana {
                commitment_level: c.commitment_level,
            },
        }
    }
}

/// Entries of per-chain array documents carry the chain they apply to.
pub trait ChainScoped {
    fn chain_id(&self) -> ChainId;
}

/// A single constructor argument as stored in `contracts.json`.
///
/// On disk these are plain JSON values. Strings are classified when loaded:
/// EVM addresses become [`ConstructorArg::Address`], lowercase `0x` hex
/// becomes [`ConstructorArg::Bytes`], anything else stays a string. Decoding
/// and re-encoding a value yields the same JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ConstructorArg {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Address(String),
    Bytes(Vec<u8>),
    Array(Vec<ConstructorArg>),
}

impl TryFrom<Value> for ConstructorArg {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(classify_string(s)),
            Value::Number(n) => Ok(ConstructorArg::Number(n)),
            Value::Bool(b) => Ok(ConstructorArg::Bool(b)),
            Value::Array(items) => items
                .into_iter()
                .map(ConstructorArg::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(ConstructorArg::Array),
            Value::Null => Err("unsupported constructor argument: null".into()),
            Value::Object(_) => Err("unsupported constructor argument: object".into()),
        }
    }
}

fn classify_string(s: String) -> ConstructorArg {
    if chain_eth::is_address(&s) {
        return ConstructorArg::Address(s);
    }

    // Only lowercase hex re-encodes to the same text.
    let lowercase_hex = s.starts_with("0x") && !s[2..].chars().any(|c| c.is_ascii_uppercase());
    if lowercase_hex {
        if let Ok(bytes) = chain_eth::decode_hex_bytes(&s) {
            return ConstructorArg::Bytes(bytes);
        }
    }

    ConstructorArg::String(s)
}

impl From<ConstructorArg> for Value {
    fn from(arg: ConstructorArg) -> Self {
        match arg {
            ConstructorArg::String(s) | ConstructorArg::Address(s) => Value::String(s),
            ConstructorArg::Number(n) => Value::Number(n),
            ConstructorArg::Bool(b) => Value::Bool(b),
            ConstructorArg::Bytes(bytes) => Value::String(chain_eth::encode_hex_bytes(&bytes)),
            ConstructorArg::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
        }
    }
}

/// One deployed contract instance on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub chain_id: ChainId,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor_args: Option<Vec<ConstructorArg>>,
}

impl ChainScoped for Deployment {
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

/// `contracts.json`: contract name to its deployments, in document order.
pub type ContractsJson = IndexMap<String, Vec<Deployment>>;

/// Protocol dependencies a deployment may need an address for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dependency {
    Wormhole,
    TokenBridge,
    Permit2,
    Oracle,
    InitGasToken,
}

impl Dependency {
    pub const ALL: [Dependency; 5] = [
        Dependency::Wormhole,
        Dependency::TokenBridge,
        Dependency::Permit2,
        Dependency::Oracle,
        Dependency::InitGasToken,
    ];

    /// Field name used in `dependencies.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dependency::Wormhole => "wormhole",
            Dependency::TokenBridge => "tokenBridge",
            Dependency::Permit2 => "permit2",
            Dependency::Oracle => "oracle",
            Dependency::InitGasToken => "initGasToken",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dependency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dependency::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown dependency: {s}"))
    }
}

/// One entry of `dependencies.json`: local override addresses for a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependenciesConfig {
    pub chain_id: ChainId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wormhole: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_bridge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_gas_token: Option<String>,
}

impl DependenciesConfig {
    pub fn get(&self, dependency: Dependency) -> Option<&str> {
        let value = match dependency {
            Dependency::Wormhole => &self.wormhole,
            Dependency::TokenBridge => &self.token_bridge,
            Dependency::Permit2 => &self.permit2,
            Dependency::Oracle => &self.oracle,
            Dependency::InitGasToken => &self.init_gas_token,
        };
        value.as_deref()
    }
}

impl ChainScoped for DependenciesConfig {
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockscoutKeys {
    pub mainnet: String,
    pub testnet: String,
}

/// One entry of `verification-api-keys.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationApiKeys {
    pub chain_id: ChainId,
    pub etherscan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockscout: Option<BlockscoutKeys>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcify: Option<String>,
}

impl ChainScoped for VerificationApiKeys {
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}
