use serde_json::Value;

use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::Closest;

const MODULE: &str = "block";

impl EtherscanClient {
    /// Block and uncle rewards for block `blockno`.
    pub async fn block_reward(&self, blockno: u64) -> Result<Value, EtherscanError> {
        self.execute(RequestDescriptor::new(MODULE, "getblockreward").param("blockno", blockno))
            .await
    }

    /// Estimated time remaining until block `blockno` is mined.
    pub async fn block_countdown(&self, blockno: u64) -> Result<Value, EtherscanError> {
        self.execute(RequestDescriptor::new(MODULE, "getblockcountdown").param("blockno", blockno))
            .await
    }

    /// Number of the block mined closest to a Unix `timestamp` (seconds).
    pub async fn block_number_by_timestamp(
        &self,
        timestamp: u64,
        closest: Closest,
    ) -> Result<String, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "getblocknobytime")
                .param("timestamp", timestamp)
                .param("closest", closest),
        )
        .await
    }
}
