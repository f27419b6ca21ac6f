use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use deploy_config::address::{ensure_looks_valid, ensure_valid};
use deploy_config::{
    is_valid_address, looks_valid, AddressFamily, ChainId, ConstructorArg, DeployContext,
    Dependency, WormholeContracts,
};
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the metadata of one chain
    Chain {
        /// Wormhole chain id
        chain_id: ChainId,
    },

    /// List the chains deployment scripts operate on
    Chains,

    /// Read or record deployed contracts
    #[command(subcommand)]
    Contract(ContractCommands),

    /// Resolve a dependency address (local override, then canonical)
    Dependency {
        /// wormhole, tokenBridge, permit2, oracle or initGasToken
        name: Dependency,
        chain_id: ChainId,
    },

    /// Check the format of an address
    Validate {
        address: String,

        /// Restrict to one family instead of accepting either
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContractCommands {
    /// Print the address of a deployed contract
    Get { name: String, chain_id: ChainId },

    /// Print the constructor arguments of a deployed contract
    Args { name: String, chain_id: ChainId },

    /// Record a deployment, replacing the entry for the same chain
    Set {
        chain_id: ChainId,
        name: String,
        address: String,

        /// Constructor arguments as a JSON array
        #[arg(long, default_value = "[]")]
        args: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Evm,
    Solana,
}

impl From<FamilyArg> for AddressFamily {
    fn from(f: FamilyArg) -> Self {
        match f {
            FamilyArg::Evm => AddressFamily::Evm,
            FamilyArg::Solana => AddressFamily::Solana,
        }
    }
}

pub fn run(command: Commands, config_dir: &Path) -> Result<()> {
    match command {
        Commands::Validate { address, family } => {
            validate(&address, family.map(AddressFamily::from))
        }
        Commands::Chain { chain_id } => {
            let ctx = load_context(config_dir)?;
            let chain = ctx.chain(chain_id)?;
            print_json(chain)
        }
        Commands::Chains => {
            let ctx = load_context(config_dir)?;
            let chains = ctx.directory().operating_chains()?;
            print_json(&chains)
        }
        Commands::Contract(cmd) => {
            let ctx = load_context(config_dir)?;
            run_contract(&ctx, cmd)
        }
        Commands::Dependency { name, chain_id } => {
            let ctx = load_context(config_dir)?;
            let chain = ctx.chain(chain_id)?;
            let address = ctx
                .resolver(WormholeContracts)
                .get_dependency_address(name, chain)?;
            println!("{address}");
            Ok(())
        }
    }
}

fn load_context(config_dir: &Path) -> Result<DeployContext> {
    DeployContext::from_env(config_dir).with_context(|| {
        format!("Failed to load deployment config from {}", config_dir.display())
    })
}

fn run_contract(ctx: &DeployContext, cmd: ContractCommands) -> Result<()> {
    let contracts = ctx.contracts();
    match cmd {
        ContractCommands::Get { name, chain_id } => {
            println!("{}", contracts.get_contract_address(&name, chain_id)?);
            Ok(())
        }
        ContractCommands::Args { name, chain_id } => {
            print_json(&contracts.get_constructor_args(&name, chain_id)?)
        }
        ContractCommands::Set {
            chain_id,
            name,
            address,
            args,
        } => {
            let what = format!("{name} contract for chain {chain_id}");
            match ctx.chain(chain_id) {
                Ok(chain) => ensure_valid(&address, chain.family(), &what)?,
                Err(_) => ensure_looks_valid(&address, &what)?,
            }
            let args = parse_args(&args)?;
            contracts.write_deployed_contract(chain_id, &name, &address, args)?;
            info!(contract = %name, chain_id, "deployment recorded");
            Ok(())
        }
    }
}

fn parse_args(raw: &str) -> Result<Vec<ConstructorArg>> {
    serde_json::from_str(raw)
        .context("Constructor args must be a JSON array of strings, numbers, booleans or arrays")
}

fn validate(address: &str, family: Option<AddressFamily>) -> Result<()> {
    let valid = match family {
        Some(family) => is_valid_address(address, family),
        None => looks_valid(address),
    };
    if !valid {
        bail!("{address} is not a valid address");
    }
    println!("valid");
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
