use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;

use super::types::GasOracle;

impl EtherscanClient {
    /// Current safe, proposed and fast gas prices.
    pub async fn gas_oracle(&self) -> Result<GasOracle, EtherscanError> {
        self.execute_as(RequestDescriptor::new("gastracker", "gasoracle"))
            .await
    }
}
