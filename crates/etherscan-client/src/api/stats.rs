use serde_json::Value;

use crate::client::EtherscanClient;
use crate::error::EtherscanError;
use crate::request::RequestDescriptor;
use crate::types::{Address, ClientType, Sort, SyncMode};

use super::types::{EtherPrice, NodeCount};

const MODULE: &str = "stats";

impl EtherscanClient {
    /// Total supply of an ERC-20 token, in the token's smallest unit.
    pub async fn token_supply(&self, contract: &Address) -> Result<String, EtherscanError> {
        self.execute_as(
            RequestDescriptor::new(MODULE, "tokensupply").param("contractaddress", contract),
        )
        .await
    }

    /// Ether in circulation, in wei, excluding staking rewards and burnt fees.
    pub async fn ether_supply(&self) -> Result<String, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "ethsupply"))
            .await
    }

    /// Ether supply broken down into circulation, staking rewards and burnt fees.
    pub async fn ether_supply2(&self) -> Result<Value, EtherscanError> {
        self.execute(RequestDescriptor::new(MODULE, "ethsupply2"))
            .await
    }

    pub async fn ether_price(&self) -> Result<EtherPrice, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "ethprice"))
            .await
    }

    /// Chain size in bytes per day between two `yyyy-MM-dd` dates.
    pub async fn chain_size(
        &self,
        start_date: &str,
        end_date: &str,
        client_type: ClientType,
        sync_mode: SyncMode,
        sort: Sort,
    ) -> Result<Vec<Value>, EtherscanError> {
        check_date(start_date)?;
        check_date(end_date)?;
        if start_date > end_date {
            return Err(EtherscanError::InvalidArgument(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }

        self.execute_as(
            RequestDescriptor::new(MODULE, "chainsize")
                .param("startdate", start_date)
                .param("enddate", end_date)
                .param("clienttype", client_type)
                .param("syncmode", sync_mode)
                .param("sort", sort),
        )
        .await
    }

    /// Total number of discoverable Ethereum nodes.
    pub async fn node_count(&self) -> Result<NodeCount, EtherscanError> {
        self.execute_as(RequestDescriptor::new(MODULE, "nodecount"))
            .await
    }
}

fn check_date(date: &str) -> Result<(), EtherscanError> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if well_formed {
        Ok(())
    } else {
        Err(EtherscanError::InvalidArgument(format!(
            "date `{date}` must be formatted yyyy-MM-dd"
        )))
    }
}
