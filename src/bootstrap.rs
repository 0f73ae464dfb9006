use alloy_primitives::Address;
use std::str::FromStr;
use tracing::{info, warn};

use crate::abi_loader::AbiLoader;
use crate::client::ChainClient;
use crate::config::{Config, ContractSpec, Credentials};
use crate::contract::ContractBinding;
use crate::error::{LoaderError, Result};

/// Everything set up once per process: credentials, client handle and ABI loader
pub struct Bootstrap {
    pub config: Config,
    pub credentials: Credentials,
    pub client: ChainClient,
    pub abi_loader: AbiLoader,
}

impl Bootstrap {
    pub fn init(config: Config) -> Result<Self> {
        Self::init_with_credentials(config, Credentials::from_env())
    }

    pub fn init_with_credentials(config: Config, credentials: Credentials) -> Result<Self> {
        if credentials.public_key.is_none() {
            warn!("PUBLIC_KEY is not set");
        }

        let mut client = ChainClient::new(&config.rpc.url)?;
        if config.rpc.with_signer {
            client = client.with_signer(&credentials)?;
        }
        info!("Blockchain client initialized for {}", client.rpc_url());

        let abi_loader = match &config.abi.directory {
            Some(dir) => AbiLoader::new(dir),
            None => AbiLoader::beside_executable()?,
        };
        info!("ABI directory: {:?}", abi_loader.base_dir());

        Ok(Self {
            config,
            credentials,
            client,
            abi_loader,
        })
    }

    pub fn bind_contract(&self, spec: &ContractSpec) -> Result<ContractBinding> {
        self.bind_contract_with(spec, |name| std::env::var(name).ok())
    }

    /// Bind using `lookup` to resolve the address variable
    pub fn bind_contract_with<F>(&self, spec: &ContractSpec, lookup: F) -> Result<ContractBinding>
    where
        F: Fn(&str) -> Option<String>,
    {
        let abi = self.abi_loader.load_json_abi(&spec.abi_file)?;

        let address_str = lookup(&spec.address_env).ok_or_else(|| {
            LoaderError::Configuration(format!(
                "{} environment variable not set (address of {})",
                spec.address_env, spec.name
            ))
        })?;
        let address = Address::from_str(address_str.trim())
            .map_err(|e| LoaderError::Configuration(format!("Invalid contract address for {}: {}", spec.name, e)))?;

        info!("Bound contract {} at {:?}", spec.name, address);
        Ok(ContractBinding::new(spec.name.clone(), address, abi, &self.client))
    }
}
