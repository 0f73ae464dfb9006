//! Blockchain client bootstrap and JSON ABI contract loading
//!
//! Reads `PUBLIC_KEY` / `PRIVATE_KEY` from the environment, builds an HTTP
//! JSON-RPC client (Alloy) bound to a configured endpoint, and loads ABI JSON
//! documents that live next to the running executable.
//!
//! # Example
//!
//! ```rust,no_run
//! use contract_loader::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let bootstrap = Bootstrap::init(Config::load()?)?;
//!
//!     // Untyped document, exactly as stored on disk
//!     let abi = bootstrap.abi_loader.load("file_ABI.json")?;
//!     println!("{} ABI entries", abi.as_array().map(|a| a.len()).unwrap_or(0));
//!
//!     let contract = bootstrap.bind_contract(&ContractSpec {
//!         name: "sm".to_string(),
//!         abi_file: "file_ABI.json".to_string(),
//!         address_env: "ADDRESS_IN_DOTENV".to_string(),
//!     })?;
//!     println!("functions: {:?}", contract.list_functions());
//!     Ok(())
//! }
//! ```

pub mod abi_loader;
pub mod bootstrap;
pub mod client;
pub mod config;
pub mod contract;
pub mod error;

pub use abi_loader::{load_abi, AbiLoader};
pub use bootstrap::Bootstrap;
pub use client::ChainClient;
pub use config::{Config, ContractSpec, Credentials, DEFAULT_RPC_URL};
pub use contract::ContractBinding;
pub use error::{LoaderError, Result};

// Re-export Alloy types for convenience
pub use alloy_dyn_abi::DynSolValue;
pub use alloy_json_abi::JsonAbi;
pub use alloy_primitives::{Address, B256, U256};

pub mod prelude {
    pub use crate::abi_loader::{load_abi, AbiLoader};
    pub use crate::bootstrap::Bootstrap;
    pub use crate::client::ChainClient;
    pub use crate::config::{Config, ContractSpec, Credentials};
    pub use crate::contract::ContractBinding;
    pub use crate::error::{LoaderError, Result};
    pub use alloy_dyn_abi::DynSolValue;
    pub use alloy_primitives::{Address, U256};
}
