//! Contract bindings built from a JSON ABI, an address and a client

use alloy_contract::{ContractInstance, Interface};
use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Event, Function, JsonAbi};
use alloy_primitives::{Address, B256};
use alloy_provider::DynProvider;
use tracing::{debug, info};

use crate::client::ChainClient;
use crate::error::{LoaderError, Result};

/// Name-based access to one deployed contract
pub struct ContractBinding {
    name: String,
    address: Address,
    abi: JsonAbi,
    instance: ContractInstance<DynProvider>,
    signer: Option<Address>,
}

impl ContractBinding {
    pub fn new(name: impl Into<String>, address: Address, abi: JsonAbi, client: &ChainClient) -> Self {
        let interface = Interface::new(abi.clone());
        let instance = ContractInstance::new(address, client.provider().clone(), interface);

        Self {
            name: name.into(),
            address,
            abi,
            instance,
            signer: client.signer_address(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Call a read-only function
    pub async fn call_function(
        &self,
        function_name: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>> {
        let call = self.instance
            .function(function_name, args)
            .map_err(|e| LoaderError::Contract(format!("Failed to create call to {}: {}", function_name, e)))?;

        debug!("Calling {}.{}", self.name, function_name);

        call.call()
            .await
            .map_err(|e| LoaderError::Contract(format!("{}.{} call failed: {}", self.name, function_name, e)))
    }

    /// Send a state-changing transaction and wait for its receipt
    pub async fn send_transaction(
        &self,
        function_name: &str,
        args: &[DynSolValue],
    ) -> Result<B256> {
        let from = self.signer.ok_or_else(|| {
            LoaderError::Transaction(format!(
                "Cannot send {}.{}: client has no signer",
                self.name, function_name
            ))
        })?;

        let call = self.instance
            .function(function_name, args)
            .map_err(|e| LoaderError::Contract(format!("Failed to create transaction {}: {}", function_name, e)))?
            .from(from);

        let pending_tx = call
            .send()
            .await
            .map_err(|e| LoaderError::Transaction(format!("Transaction failed: {}", e)))?;

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| LoaderError::Transaction(format!("Failed to get receipt: {}", e)))?;

        info!("{}.{} mined in tx {:?}", self.name, function_name, receipt.transaction_hash);
        Ok(receipt.transaction_hash)
    }

    /// Get function by name
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| LoaderError::Contract(format!("Function '{}' not found in ABI", name)))
    }

    /// Get event by name
    pub fn event(&self, name: &str) -> Result<&Event> {
        self.abi
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| LoaderError::Contract(format!("Event '{}' not found in ABI", name)))
    }

    pub fn list_functions(&self) -> Vec<String> {
        self.abi.functions().map(|f| f.name.clone()).collect()
    }

    pub fn list_events(&self) -> Vec<String> {
        self.abi.events().map(|e| e.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn counter_abi() -> JsonAbi {
        serde_json::from_value(serde_json::json!([
            {
                "type": "function",
                "name": "number",
                "inputs": [],
                "outputs": [{ "name": "", "type": "uint256" }],
                "stateMutability": "view"
            },
            {
                "type": "function",
                "name": "setNumber",
                "inputs": [{ "name": "newNumber", "type": "uint256" }],
                "outputs": [],
                "stateMutability": "nonpayable"
            },
            {
                "type": "event",
                "name": "NumberSet",
                "inputs": [{ "name": "value", "type": "uint256", "indexed": false }],
                "anonymous": false
            }
        ]))
        .unwrap()
    }

    fn binding() -> ContractBinding {
        let client = ChainClient::new("http://127.0.0.1:1").unwrap();
        ContractBinding::new("counter", Address::repeat_byte(0x11), counter_abi(), &client)
    }

    #[test]
    fn test_introspection() {
        let contract = binding();
        assert_eq!(contract.name(), "counter");
        assert_eq!(contract.address(), Address::repeat_byte(0x11));

        let mut functions = contract.list_functions();
        functions.sort();
        assert_eq!(functions, vec!["number".to_string(), "setNumber".to_string()]);
        assert_eq!(contract.list_events(), vec!["NumberSet".to_string()]);

        assert_eq!(contract.function("setNumber").unwrap().inputs.len(), 1);
        assert!(contract.event("NumberSet").is_ok());
        assert!(matches!(contract.function("missing"), Err(LoaderError::Contract(_))));
        assert!(matches!(contract.event("Missing"), Err(LoaderError::Contract(_))));
    }

    #[tokio::test]
    async fn test_unknown_function_fails_before_network() {
        let contract = binding();
        let result = contract.call_function("doesNotExist", &[]).await;
        match result {
            Err(LoaderError::Contract(msg)) => assert!(msg.contains("Failed to create call")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_requires_signer() {
        let contract = binding();
        let result = contract
            .send_transaction("setNumber", &[DynSolValue::Uint(U256::from(7), 256)])
            .await;
        assert!(matches!(result, Err(LoaderError::Transaction(_))));
    }
}
