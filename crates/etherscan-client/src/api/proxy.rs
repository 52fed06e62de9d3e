//! Geth/Parity JSON-RPC passthrough (`module=proxy`).
//!
//! Results come back in a JSON-RPC envelope rather than the usual
//! `{status, message, result}` one. Lookups of unknown blocks or
//! transactions yield `None`.

use serde_json::Value;

use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::{Address, BlockTag, HexQuantity, TxHash};

const MODULE: &str = "proxy";

impl EtherscanClient {
    /// Number of the most recent block, hex-encoded.
    pub async fn proxy_block_number(&self) -> Result<String, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "eth_blockNumber"))
            .await
    }

    /// Block by number; `full_transactions` selects full objects over hashes.
    pub async fn proxy_block_by_number(
        &self,
        tag: HexQuantity,
        full_transactions: bool,
    ) -> Result<Option<Value>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getBlockByNumber")
                .param("tag", tag)
                .param("boolean", full_transactions),
        )
        .await
    }

    pub async fn proxy_uncle_by_block_number_and_index(
        &self,
        tag: HexQuantity,
        index: HexQuantity,
    ) -> Result<Option<Value>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getUncleByBlockNumberAndIndex")
                .param("tag", tag)
                .param("index", index),
        )
        .await
    }

    /// Number of transactions in a block, hex-encoded.
    pub async fn proxy_block_transaction_count(
        &self,
        tag: HexQuantity,
    ) -> Result<Option<String>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getBlockTransactionCountByNumber").param("tag", tag),
        )
        .await
    }

    pub async fn proxy_transaction_by_hash(
        &self,
        txhash: &TxHash,
    ) -> Result<Option<Value>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getTransactionByHash").param("txhash", txhash),
        )
        .await
    }

    pub async fn proxy_transaction_by_block_number_and_index(
        &self,
        tag: HexQuantity,
        index: HexQuantity,
    ) -> Result<Option<Value>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getTransactionByBlockNumberAndIndex")
                .param("tag", tag)
                .param("index", index),
        )
        .await
    }

    /// Nonce of `address`, hex-encoded.
    pub async fn proxy_transaction_count(
        &self,
        address: &Address,
        tag: BlockTag,
    ) -> Result<String, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getTransactionCount")
                .param("address", address)
                .param("tag", tag),
        )
        .await
    }

    pub async fn proxy_transaction_receipt(
        &self,
        txhash: &TxHash,
    ) -> Result<Option<Value>, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "eth_getTransactionReceipt").param("txhash", txhash),
        )
        .await
    }

    /// Current gas price in wei, hex-encoded.
    pub async fn proxy_gas_price(&self) -> Result<String, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "eth_gasPrice"))
            .await
    }
}
