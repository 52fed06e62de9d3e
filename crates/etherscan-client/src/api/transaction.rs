use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::TxHash;

use super::types::{ExecutionStatus, ReceiptStatus};

const MODULE: &str = "transaction";

impl EtherscanClient {
    /// Whether a contract execution errored, with the revert reason if any.
    pub async fn contract_execution_status(
        &self,
        txhash: &TxHash,
    ) -> Result<ExecutionStatus, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "getstatus").param("txhash", txhash))
            .await
    }

    /// Receipt status of a post-Byzantium transaction.
    pub async fn transaction_receipt_status(
        &self,
        txhash: &TxHash,
    ) -> Result<ReceiptStatus, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "gettxreceiptstatus").param("txhash", txhash),
        )
        .await
    }
}
