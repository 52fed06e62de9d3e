use serde_json::Value;

use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::{Address, BlockRange, BlockTag, BlockType, Pagination, Sort, TxHash};

use super::types::{AccountBalance, MinedBlock};
use super::TxListQuery;

const MODULE: &str = "account";

/// Upper bound the service accepts for `balancemulti`.
pub const MAX_BALANCE_MULTI_ADDRESSES: usize = 20;

impl EtherscanClient {
    /// Ether balance of `address`, in wei.
    pub async fn balance(&self, address: &Address, tag: BlockTag) -> Result<String, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "balance")
                .param("address", address)
                .param("tag", tag),
        )
        .await
    }

    /// Ether balances for up to [`MAX_BALANCE_MULTI_ADDRESSES`] addresses.
    pub async fn balance_multi(
        &self,
        addresses: &[Address],
        tag: BlockTag,
    ) -> Result<Vec<AccountBalance>, EtherscanError> {
        if addresses.is_empty() || addresses.len() > MAX_BALANCE_MULTI_ADDRESSES {
            return Err(EtherscanError::InvalidArgument(format!(
                "balancemulti takes 1 to {MAX_BALANCE_MULTI_ADDRESSES} addresses, got {}",
                addresses.len()
            )));
        }
        let joined = addresses
            .iter()
            .map(Address::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.execute_as(
            RequestDescriptor::new(MODULE, "balancemulti")
                .param("address", joined)
                .param("tag", tag),
        )
        .await
    }

    /// Normal transactions sent from or to `address`.
    pub async fn normal_transactions(
        &self,
        address: &Address,
        query: &TxListQuery,
    ) -> Result<Vec<Value>, EtherscanError> {
        let request = RequestDescriptor::new(MODULE, "txlist").param("address", address);
        self.execute_as(query.apply(request)).await
    }

    pub async fn internal_transactions_by_address(
        &self,
        address: &Address,
        query: &TxListQuery,
    ) -> Result<Vec<Value>, EtherscanError> {
        let request = RequestDescriptor::new(MODULE, "txlistinternal").param("address", address);
        self.execute_as(query.apply(request)).await
    }

    /// Internal transactions executed within one transaction.
    pub async fn internal_transactions_by_hash(
        &self,
        txhash: &TxHash,
    ) -> Result<Vec<Value>, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "txlistinternal").param("txhash", txhash))
            .await
    }

    pub async fn internal_transactions_by_block_range(
        &self,
        range: BlockRange,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
    ) -> Result<Vec<Value>, EtherscanError> {
        let query = TxListQuery {
            range: Some(range),
            pagination,
            sort,
        };
        self.execute_as(query.apply(RequestDescriptor::new(MODULE, "txlistinternal")))
            .await
    }

    /// ERC-20 transfer events, filtered by holder, token contract, or both.
    pub async fn erc20_transfers(
        &self,
        address: Option<&Address>,
        contract: Option<&Address>,
        query: &TxListQuery,
    ) -> Result<Vec<Value>, EtherscanError> {
        self.token_transfers("tokentx", address, contract, query)
            .await
    }

    /// ERC-721 (NFT) transfer events, filtered by holder, token contract, or both.
    pub async fn erc721_transfers(
        &self,
        address: Option<&Address>,
        contract: Option<&Address>,
        query: &TxListQuery,
    ) -> Result<Vec<Value>, EtherscanError> {
        self.token_transfers("tokennfttx", address, contract, query)
            .await
    }

    async fn token_transfers(
        &self,
        action: &str,
        address: Option<&Address>,
        contract: Option<&Address>,
        query: &TxListQuery,
    ) -> Result<Vec<Value>, EtherscanError> {
        if address.is_none() && contract.is_none() {
            return Err(EtherscanError::InvalidArgument(format!(
                "{action} needs an address, a contract address, or both"
            )));
        }
        let request = RequestDescriptor::new(MODULE, action)
            .opt_param("contractaddress", contract)
            .opt_param("address", address);
        self.execute_as(query.apply(request)).await
    }

    /// Blocks (or uncles) validated by `address`.
    pub async fn mined_blocks(
        &self,
        address: &Address,
        block_type: BlockType,
        pagination: Option<Pagination>,
    ) -> Result<Vec<MinedBlock>, EtherscanError> {
        let request = RequestDescriptor::new(MODULE, "getminedblocks")
            .param("address", address)
            .param("blocktype", block_type)
            .opt_param("page", pagination.map(|p| p.page))
            .opt_param("offset", pagination.map(|p| p.offset));
        self.execute_as(request).await
    }

    /// ERC-20 token balance of `address` for the token at `contract`.
    pub async fn token_balance(
        &self,
        contract: &Address,
        address: &Address,
        tag: BlockTag,
    ) -> Result<String, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "tokenbalance")
                .param("contractaddress", contract)
                .param("address", address)
                .param("tag", tag),
        )
        .await
    }
}
