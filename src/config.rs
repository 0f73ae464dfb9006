use alloy::signers::local::PrivateKeySigner;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::{LoaderError, Result};

/// Default JSON-RPC endpoint (Sonic Blaze testnet)
pub const DEFAULT_RPC_URL: &str = "https://rpc.blaze.soniclabs.com";

pub const PUBLIC_KEY_VAR: &str = "PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub abi: AbiConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub contracts: Vec<ContractSpec>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RpcConfig {
    #[serde(default = "default_rpc_url")]
    pub url: String,
    pub chain_id: Option<u64>,
    /// Ask the node for the latest block on startup
    #[serde(default)]
    pub verify_connection: bool,
    /// Attach a wallet built from PRIVATE_KEY to the client
    #[serde(default)]
    pub with_signer: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AbiConfig {
    /// Overrides the executable's directory as the ABI lookup root
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// A contract to bind at startup: ABI file name plus the env var holding its address
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContractSpec {
    pub name: String,
    pub abi_file: String,
    pub address_env: String,
}

fn default_rpc_url() -> String { DEFAULT_RPC_URL.to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_rpc_url(),
            chain_id: None,
            verify_connection: false,
            with_signer: false,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

impl Config {
    /// Load `.env`, then `config.toml` (optional), then `LOADER_*` environment overrides
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenv::dotenv().ok();
        Self::load_with_file("config")
    }

    pub fn load_with_file(file: &str) -> Result<Self> {
        let config_builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            // e.g. LOADER_RPC__URL, LOADER_SERVICE__LOG_LEVEL
            .add_source(
                config::Environment::with_prefix("LOADER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config_builder.try_deserialize()?;
        Ok(config)
    }
}

/// Public identifier and private signing key, read once and never validated on read
#[derive(Clone, Default)]
pub struct Credentials {
    pub public_key: Option<String>,
    private_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            public_key: lookup(PUBLIC_KEY_VAR),
            private_key: lookup(PRIVATE_KEY_VAR),
        }
    }

    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Build a local signer from the private key.
    /// This is where absent or malformed credentials finally surface.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        let key = self
            .private_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| LoaderError::Credentials(format!("{} is not set", PRIVATE_KEY_VAR)))?;

        key.parse::<PrivateKeySigner>()
            .map_err(|e| LoaderError::Credentials(format!("Invalid private key: {}", e)))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
