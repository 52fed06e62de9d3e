//! Result shapes for endpoints whose payload is small and documented.
//!
//! Numeric fields stay strings, as the service sends them; wei amounts
//! overflow every native integer type for some accounts.

use serde::Deserialize;

// ==============================================================================
// Gas Tracker
// ==============================================================================

/// Current safe / proposed / fast gas prices, in gwei.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GasOracle {
    #[serde(rename = "LastBlock", default)]
    pub last_block: Option<String>,
    #[serde(rename = "SafeGasPrice")]
    pub safe_gas_price: String,
    #[serde(rename = "ProposeGasPrice")]
    pub propose_gas_price: String,
    #[serde(rename = "FastGasPrice")]
    pub fast_gas_price: String,
    #[serde(rename = "suggestBaseFee", default)]
    pub suggest_base_fee: Option<String>,
    #[serde(rename = "gasUsedRatio", default)]
    pub gas_used_ratio: Option<String>,
}

// ==============================================================================
// Accounts
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    /// Balance in wei.
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinedBlock {
    pub block_number: String,
    pub time_stamp: String,
    pub block_reward: String,
}

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    pub is_error: String,
    #[serde(default)]
    pub err_description: String,
}

impl ExecutionStatus {
    pub fn is_error(&self) -> bool {
        self.is_error == "1"
    }
}

/// Receipt status: `"1"` success, `"0"` failure, empty for pre-Byzantium.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceiptStatus {
    pub status: String,
}

impl ReceiptStatus {
    pub fn is_success(&self) -> Option<bool> {
        match self.status.as_str() {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

// ==============================================================================
// Stats
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EtherPrice {
    pub ethbtc: String,
    pub ethbtc_timestamp: String,
    pub ethusd: String,
    pub ethusd_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeCount {
    #[serde(rename = "UTCDate")]
    pub utc_date: String,
    #[serde(rename = "TotalNodeCount")]
    pub total_node_count: String,
}
