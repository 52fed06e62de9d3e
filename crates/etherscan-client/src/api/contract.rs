use serde_json::Value;

use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::Address;

const MODULE: &str = "contract";

impl EtherscanClient {
    /// ABI of a verified contract, as the JSON-encoded string the service returns.
    pub async fn contract_abi(&self, address: &Address) -> Result<String, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "getabi").param("address", address))
            .await
    }

    /// Source code and compiler metadata of a verified contract.
    pub async fn contract_source_code(&self, address: &Address) -> Result<Vec<Value>, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "getsourcecode").param("address", address))
            .await
    }
}
