//! JSON-RPC client handle

use alloy::network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use tracing::{debug, info};

use crate::config::Credentials;
use crate::error::{LoaderError, Result};

/// HTTP provider bound to one endpoint, optionally carrying a wallet.
///
/// Building it performs no network I/O; an unreachable node only shows up on the
/// first request.
#[derive(Clone)]
pub struct ChainClient {
    rpc_url: reqwest::Url,
    provider: DynProvider,
    signer_address: Option<Address>,
}

impl ChainClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let rpc_url: reqwest::Url = rpc_url
            .parse()
            .map_err(|e| LoaderError::Configuration(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

        let provider = ProviderBuilder::new()
            .connect_http(rpc_url.clone())
            .erased();

        debug!("Client bound to {}", rpc_url);

        Ok(Self {
            rpc_url,
            provider,
            signer_address: None,
        })
    }

    /// Rebuild the provider with a wallet derived from the private key
    pub fn with_signer(self, credentials: &Credentials) -> Result<Self> {
        let signer = credentials.signer()?;
        let signer_address = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(self.rpc_url.clone())
            .erased();

        info!("Signer attached: {:?}", signer_address);

        Ok(Self {
            rpc_url: self.rpc_url,
            provider,
            signer_address: Some(signer_address),
        })
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn rpc_url(&self) -> &reqwest::Url {
        &self.rpc_url
    }

    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// Check connection to the RPC endpoint
    pub async fn check_connection(&self) -> Result<u64> {
        let block_number = self.provider
            .get_block_number()
            .await
            .map_err(|e| LoaderError::Provider(format!("Failed to get block number: {}", e)))?;

        Ok(block_number)
    }

    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| LoaderError::Provider(format!("Failed to get chain id: {}", e)))
    }
}
