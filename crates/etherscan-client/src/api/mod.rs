//! Typed endpoint wrappers, one file per remote module.
//!
//! Every wrapper is a thin call-through to [`EtherscanClient::execute`]
//! that declares the result shape it expects. Large records whose schema
//! the service versions independently (transaction lists, source code,
//! blocks) are returned as [`serde_json::Value`].
//!
//! [`EtherscanClient::execute`]: crate::client::EtherscanClient::execute

mod account;
mod block;
mod contract;
mod gas;
mod proxy;
mod stats;
mod transaction;
pub mod types;

pub use account::MAX_BALANCE_MULTI_ADDRESSES;

use crate::request::RequestDescriptor;
use crate::types::{BlockRange, Pagination, Sort};

/// Optional filters shared by the transaction-list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxListQuery {
    pub range: Option<BlockRange>,
    pub pagination: Option<Pagination>,
    pub sort: Option<Sort>,
}

impl TxListQuery {
    fn apply(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .opt_param("startblock", self.range.map(|r| r.start))
            .opt_param("endblock", self.range.map(|r| r.end))
            .opt_param("page", self.pagination.map(|p| p.page))
            .opt_param("offset", self.pagination.map(|p| p.offset))
            .opt_param("sort", self.sort)
    }
}
